//! DOCX rendering for the editorial brief.
//!
//! Mirrors the brief layout the desk reviews: suggested title, meta,
//! keywords, slug, JSON-LD, internal links, alt texts, readability notes,
//! and the paragraph-wise rewrite.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::domain::schema::news_article_json_ld;
use crate::domain::seo::SuggestionBundle;
use crate::ports::{ExportError, ExportFormat};

/// Renders the bundle as a DOCX brief.
pub fn render_docx(bundle: &SuggestionBundle) -> Result<Vec<u8>, ExportError> {
    let json_ld = serde_json::to_string_pretty(&news_article_json_ld(bundle))
        .map_err(|e| ExportError::render_failed(ExportFormat::Docx, e.to_string()))?;

    let mut docx = Docx::new()
        .add_paragraph(heading("SEO Suggester Output", 36))
        .add_paragraph(heading("Suggested Title", 28))
        .add_paragraph(body_text(&bundle.title))
        .add_paragraph(heading("Suggested Meta", 28))
        .add_paragraph(body_text(&bundle.meta_description))
        .add_paragraph(heading("Suggested Keywords", 28))
        .add_paragraph(body_text(&bundle.keywords.join(", ")))
        .add_paragraph(heading("Suggested URL Slug", 28))
        .add_paragraph(body_text(&bundle.slug))
        .add_paragraph(heading("NewsArticle JSON-LD", 28))
        .add_paragraph(body_text(&json_ld))
        .add_paragraph(heading("Suggested Internal Links", 28));

    for link in &bundle.internal_links {
        docx = docx.add_paragraph(body_text(&format!("{}: {}", link.label, link.url)));
    }

    docx = docx.add_paragraph(heading("Suggested Image Alt Text", 28));
    for alt in &bundle.alt_texts {
        docx = docx.add_paragraph(body_text(alt));
    }

    docx = docx.add_paragraph(heading("Readability Notes", 28));
    for note in &bundle.readability_notes {
        docx = docx.add_paragraph(body_text(&format!("- {}", note)));
    }

    docx = docx.add_paragraph(heading("Rewritten Article (Paragraph-wise)", 28));
    for paragraph in &bundle.paragraphs {
        if !paragraph.trim().is_empty() {
            docx = docx.add_paragraph(body_text(paragraph.trim()));
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::render_failed(ExportFormat::Docx, e.to_string()))?;

    Ok(cursor.into_inner())
}

/// Bold run sized in half-points, standing in for a heading style.
fn heading(text: &str, half_points: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(half_points))
}

fn body_text(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Article;
    use crate::domain::foundation::{ArticleId, ArticleOrigin, Section};
    use crate::domain::seo::SuggestionDraft;
    use chrono::Utc;

    fn bundle() -> SuggestionBundle {
        let article = Article::from_pasted(
            "Metro line approved\nThe cabinet approved the new metro line today. Work begins soon.",
        )
        .unwrap();
        let draft = SuggestionDraft::heuristic(&article);
        SuggestionBundle::assemble(
            ArticleId::generate(ArticleOrigin::Pasted),
            &article,
            draft,
            Section::National,
            "Desk",
            "Example Times",
            "https://example.com",
            2,
            Vec::new(),
            Utc::now(),
        )
    }

    #[test]
    fn renders_nonempty_zip() {
        let bytes = render_docx(&bundle()).unwrap();
        // DOCX is a zip archive; check the PK magic.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }
}
