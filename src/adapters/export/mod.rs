//! Bundle Export Adapters.
//!
//! Implementation of the BundleExporter port. Each format has its own
//! renderer; `DeskExporter` dispatches between them.

mod csv;
mod docx;
mod html;
mod jsonld;

pub use csv::render_csv_row;
pub use docx::render_docx;
pub use html::render_html_snippet;
pub use jsonld::render_json_ld;

use crate::domain::seo::SuggestionBundle;
use crate::ports::{BundleExporter, ExportError, ExportFormat, ExportedBundle};

/// Format-dispatching exporter used by the HTTP layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeskExporter;

impl DeskExporter {
    /// Creates a new exporter.
    pub fn new() -> Self {
        Self
    }
}

impl BundleExporter for DeskExporter {
    fn export(
        &self,
        bundle: &SuggestionBundle,
        format: ExportFormat,
    ) -> Result<ExportedBundle, ExportError> {
        let content = match format {
            ExportFormat::Docx => render_docx(bundle)?,
            ExportFormat::Html => render_html_snippet(bundle)?.into_bytes(),
            ExportFormat::JsonLd => render_json_ld(bundle)?.into_bytes(),
            ExportFormat::Csv => render_csv_row(bundle)?,
        };

        Ok(ExportedBundle::new(content, format, bundle.id.as_str()))
    }
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
            "Headline text\nBody of the story with enough words to build a bundle.",
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
            1,
            Vec::new(),
            Utc::now(),
        )
    }

    #[test]
    fn exports_every_format() {
        let exporter = DeskExporter::new();
        let bundle = bundle();

        for format in [
            ExportFormat::Docx,
            ExportFormat::Html,
            ExportFormat::JsonLd,
            ExportFormat::Csv,
        ] {
            let exported = exporter.export(&bundle, format).unwrap();
            assert!(!exported.content.is_empty(), "{} was empty", format);
            assert!(exported.filename.starts_with(bundle.id.as_str()));
            assert!(exported.filename.ends_with(format.extension()));
        }
    }
}
