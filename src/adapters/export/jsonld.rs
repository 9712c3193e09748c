//! Standalone JSON-LD rendering.

use crate::domain::schema::news_article_json_ld;
use crate::domain::seo::SuggestionBundle;
use crate::ports::{ExportError, ExportFormat};

/// Renders the schema.org NewsArticle object as pretty-printed JSON.
pub fn render_json_ld(bundle: &SuggestionBundle) -> Result<String, ExportError> {
    serde_json::to_string_pretty(&news_article_json_ld(bundle))
        .map_err(|e| ExportError::render_failed(ExportFormat::JsonLd, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Article;
    use crate::domain::foundation::{ArticleId, ArticleOrigin, Section};
    use crate::domain::seo::SuggestionDraft;
    use chrono::Utc;

    #[test]
    fn output_is_valid_json_with_type() {
        let article = Article::from_pasted(
            "Headline text\nBody of the story with enough words to build a bundle.",
        )
        .unwrap();
        let draft = SuggestionDraft::heuristic(&article);
        let bundle = SuggestionBundle::assemble(
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
        );

        let rendered = render_json_ld(&bundle).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["@type"], "NewsArticle");
        assert_eq!(parsed["headline"], bundle.title);
    }
}
