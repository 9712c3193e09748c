//! HTML `<head>` snippet rendering.

use crate::domain::schema::news_article_json_ld;
use crate::domain::seo::SuggestionBundle;
use crate::ports::{ExportError, ExportFormat};

/// Renders the paste-ready head snippet: title, meta description,
/// canonical link, and the JSON-LD script block.
pub fn render_html_snippet(bundle: &SuggestionBundle) -> Result<String, ExportError> {
    let json_ld = serde_json::to_string_pretty(&news_article_json_ld(bundle))
        .map_err(|e| ExportError::render_failed(ExportFormat::Html, e.to_string()))?;

    Ok(format!(
        r#"<!-- SEO snippet start -->
<title>{title}</title>
<meta name="description" content="{meta}">
<link rel="canonical" href="{canonical}">
<script type="application/ld+json">
{json_ld}
</script>
<!-- SEO snippet end -->
"#,
        title = html_escape(&bundle.title),
        meta = html_escape(&bundle.meta_description),
        canonical = html_escape(&bundle.canonical_url),
        json_ld = json_ld,
    ))
}

/// Escapes HTML special characters.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Article;
    use crate::domain::foundation::{ArticleId, ArticleOrigin, Section};
    use crate::domain::seo::SuggestionDraft;
    use chrono::Utc;

    fn bundle_with_title(title: &str) -> SuggestionBundle {
        let article = Article::from_pasted(
            "Some headline\nBody text of the article goes here for the snippet test.",
        )
        .unwrap();
        let mut draft = SuggestionDraft::heuristic(&article);
        draft.title = title.to_string();
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
    fn snippet_contains_all_head_elements() {
        let snippet = render_html_snippet(&bundle_with_title("Plain Title")).unwrap();

        assert!(snippet.contains("<title>Plain Title</title>"));
        assert!(snippet.contains(r#"<meta name="description""#));
        assert!(snippet.contains(r#"<link rel="canonical""#));
        assert!(snippet.contains(r#"<script type="application/ld+json">"#));
        assert!(snippet.contains("NewsArticle"));
    }

    #[test]
    fn title_is_escaped() {
        let snippet = render_html_snippet(&bundle_with_title(r#"A <b>"bold"</b> & risky title"#))
            .unwrap();
        assert!(snippet.contains("A &lt;b&gt;&quot;bold&quot;&lt;/b&gt; &amp; risky title"));
    }

    #[test]
    fn escape_handles_all_specials() {
        assert_eq!(html_escape(r#"<&>"'"#), "&lt;&amp;&gt;&quot;&#39;");
    }
}
