//! schema.org NewsArticle structured data.

use serde_json::{json, Value};

use crate::domain::seo::SuggestionBundle;

/// Builds the JSON-LD `NewsArticle` object for a bundle.
pub fn news_article_json_ld(bundle: &SuggestionBundle) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": bundle.title,
        "description": bundle.meta_description,
        "datePublished": bundle.date_published.to_rfc3339(),
        "author": {
            "@type": "Person",
            "name": bundle.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": bundle.publisher,
        },
        "mainEntityOfPage": bundle.canonical_url,
        "articleSection": bundle.section.display_name(),
        "keywords": bundle.keywords.join(", "),
        "isAccessibleForFree": true,
    })
}
