//! The SEO Suggestion Bundle and its heuristic derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alt_text::alt_texts;
use super::headline::{clamp, suggest_title, MAX_TITLE_LEN};
use super::keywords::top_keywords;
use super::links::InternalLink;
use super::meta::{suggest_meta, MAX_META_LEN};
use super::readability::readability_notes;
use super::slug::{normalize_slug, slugify};
use crate::domain::article::{paragraphs, Article};
use crate::domain::foundation::{ArticleId, Section};

/// Default number of keywords suggested per article.
const DEFAULT_KEYWORD_COUNT: usize = 6;

/// A suggested section heading with optional subheadings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// H2 text.
    pub h2: String,
    /// H3 texts under this H2.
    #[serde(default)]
    pub h3: Vec<String>,
}

impl Heading {
    /// Creates a heading with no subheadings.
    pub fn new(h2: impl Into<String>) -> Self {
        Self {
            h2: h2.into(),
            h3: Vec::new(),
        }
    }
}

/// The editorial core of a suggestion, before publication context is added.
///
/// This is the shape both derivation paths produce: the LLM rewriter
/// returns one, and [`SuggestionDraft::heuristic`] computes one locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionDraft {
    /// Suggested SEO title.
    pub title: String,
    /// Suggested meta description.
    pub meta: String,
    /// Suggested URL slug.
    pub slug: String,
    /// Suggested keywords.
    pub keywords: Vec<String>,
    /// Suggested section headings.
    pub headings: Vec<Heading>,
    /// Paragraph-wise rewrite (or the original paragraphs).
    pub paragraphs: Vec<String>,
    /// Readability / SEO notes.
    pub notes: Vec<String>,
}

impl SuggestionDraft {
    /// Derives a draft from the article using the local heuristics.
    pub fn heuristic(article: &Article) -> Self {
        let title = suggest_title(&article.body, article.title.as_deref());
        Self {
            slug: slugify(&title),
            meta: suggest_meta(&article.body),
            keywords: top_keywords(&article.body, DEFAULT_KEYWORD_COUNT),
            headings: Self::default_headings(),
            paragraphs: paragraphs(&article.body)
                .into_iter()
                .map(str::to_string)
                .collect(),
            notes: readability_notes(&article.body),
            title,
        }
    }

    /// Fills any empty field from the heuristics and enforces the field
    /// limits on whatever the rewriter supplied.
    ///
    /// Rewriter content is kept where present, but it gets no exemption
    /// from the length and slug rules: the title and meta are clamped, and
    /// a malformed slug is re-derived. The slug also feeds the constructed
    /// canonical URL, so it must come out of here well-formed.
    pub fn fill_gaps(mut self, article: &Article) -> Self {
        if self.title.trim().is_empty() {
            self.title = suggest_title(&article.body, article.title.as_deref());
        }
        if self.meta.trim().is_empty() {
            self.meta = suggest_meta(&article.body);
        }
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        if self.keywords.is_empty() {
            self.keywords = top_keywords(&article.body, DEFAULT_KEYWORD_COUNT);
        }
        if self.headings.is_empty() {
            self.headings = Self::default_headings();
        }
        if self.paragraphs.is_empty() {
            self.paragraphs = paragraphs(&article.body)
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        if self.notes.is_empty() {
            self.notes = readability_notes(&article.body);
        }

        self.title = clamp(self.title.trim(), MAX_TITLE_LEN);
        self.meta = clamp(self.meta.trim(), MAX_META_LEN);
        self.slug = normalize_slug(&self.slug);
        self
    }

    fn default_headings() -> Vec<Heading> {
        vec![
            Heading::new("Background"),
            Heading::new("Statements / Reactions"),
        ]
    }
}

/// The full per-article suggestion bundle.
///
/// Constructed per request, exported on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    /// Article identifier (also used in export filenames).
    pub id: ArticleId,
    /// Editorial section.
    pub section: Section,
    /// Byline.
    pub author: String,
    /// Publisher organization.
    pub publisher: String,
    /// Suggested SEO title.
    pub title: String,
    /// Suggested meta description.
    pub meta_description: String,
    /// Suggested URL slug.
    pub slug: String,
    /// Suggested keywords.
    pub keywords: Vec<String>,
    /// Suggested headings.
    pub headings: Vec<Heading>,
    /// Paragraph-wise rewrite.
    pub paragraphs: Vec<String>,
    /// Image alt-text suggestions.
    pub alt_texts: Vec<String>,
    /// Readability / SEO notes.
    pub readability_notes: Vec<String>,
    /// Internal links worth adding.
    pub internal_links: Vec<InternalLink>,
    /// Suggested canonical URL.
    pub canonical_url: String,
    /// Publication timestamp used in the JSON-LD.
    pub date_published: DateTime<Utc>,
}

impl SuggestionBundle {
    /// Assembles a bundle from a draft plus publication context.
    ///
    /// The canonical URL prefers the one extracted from the source page;
    /// otherwise it is built as `{base}/{section}/{slug}`.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        id: ArticleId,
        article: &Article,
        draft: SuggestionDraft,
        section: Section,
        author: impl Into<String>,
        publisher: impl Into<String>,
        canonical_base: &str,
        alt_text_count: usize,
        internal_links: Vec<InternalLink>,
        date_published: DateTime<Utc>,
    ) -> Self {
        let canonical_url = article.canonical.clone().unwrap_or_else(|| {
            format!(
                "{}/{}/{}",
                canonical_base.trim_end_matches('/'),
                section.path_segment(),
                draft.slug
            )
        });

        Self {
            id,
            section,
            author: author.into(),
            publisher: publisher.into(),
            title: draft.title,
            meta_description: draft.meta,
            slug: draft.slug,
            keywords: draft.keywords,
            headings: draft.headings,
            paragraphs: draft.paragraphs,
            alt_texts: alt_texts(&article.body, alt_text_count),
            readability_notes: draft.notes,
            internal_links,
            canonical_url,
            date_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ArticleOrigin;

    fn sample_article() -> Article {
        Article::from_pasted(
            "Congress announces candidate list\nThe Congress party announced its full candidate \
             list for the state elections today. Senior leaders addressed the press in Jaipur.",
        )
        .unwrap()
    }

    #[test]
    fn heuristic_draft_is_complete() {
        let draft = SuggestionDraft::heuristic(&sample_article());

        assert!(!draft.title.is_empty());
        assert!(!draft.meta.is_empty());
        assert!(!draft.slug.is_empty());
        assert!(!draft.keywords.is_empty());
        assert!(!draft.headings.is_empty());
        assert!(!draft.paragraphs.is_empty());
        assert!(!draft.notes.is_empty());
    }

    #[test]
    fn fill_gaps_backfills_empty_fields() {
        let article = sample_article();
        let partial = SuggestionDraft {
            title: "AI title".to_string(),
            ..Default::default()
        };

        let filled = partial.fill_gaps(&article);
        assert_eq!(filled.title, "AI title");
        assert_eq!(filled.slug, slugify("AI title"));
        assert!(!filled.meta.is_empty());
        assert!(!filled.keywords.is_empty());
    }

    #[test]
    fn fill_gaps_enforces_field_limits() {
        let article = sample_article();
        let plan = SuggestionDraft {
            title: "word ".repeat(40),
            meta: "detail ".repeat(40),
            slug: "Invalid Slug!! With Spaces".to_string(),
            ..Default::default()
        };

        let filled = plan.fill_gaps(&article);
        assert!(filled.title.chars().count() <= MAX_TITLE_LEN);
        assert!(filled.meta.chars().count() <= MAX_META_LEN);
        assert_eq!(filled.slug, "invalid-slug-spaces");
    }

    #[test]
    fn malformed_slug_keeps_canonical_url_valid() {
        let article = sample_article();
        let plan = SuggestionDraft {
            title: "Fine title".to_string(),
            slug: "-Broken Slug-".to_string(),
            ..Default::default()
        };

        let bundle = SuggestionBundle::assemble(
            ArticleId::generate(ArticleOrigin::Pasted),
            &article,
            plan.fill_gaps(&article),
            Section::National,
            "Desk",
            "Example Times",
            "https://example.com",
            1,
            Vec::new(),
            Utc::now(),
        );

        assert_eq!(bundle.canonical_url, "https://example.com/national/broken-slug");
    }

    #[test]
    fn fill_gaps_keeps_rewriter_fields() {
        let article = sample_article();
        let plan = SuggestionDraft {
            title: "AI title".to_string(),
            meta: "AI meta".to_string(),
            slug: "ai-slug".to_string(),
            keywords: vec!["ai".to_string()],
            headings: vec![Heading::new("AI heading")],
            paragraphs: vec!["AI paragraph".to_string()],
            notes: vec!["AI note".to_string()],
        };

        let filled = plan.clone().fill_gaps(&article);
        assert_eq!(filled, plan);
    }

    #[test]
    fn assemble_builds_canonical_from_slug() {
        let article = sample_article();
        let draft = SuggestionDraft::heuristic(&article);
        let slug = draft.slug.clone();

        let bundle = SuggestionBundle::assemble(
            ArticleId::generate(ArticleOrigin::Pasted),
            &article,
            draft,
            Section::National,
            "Desk",
            "Example Times",
            "https://example.com/",
            2,
            Vec::new(),
            Utc::now(),
        );

        assert_eq!(
            bundle.canonical_url,
            format!("https://example.com/national/{}", slug)
        );
        assert_eq!(bundle.alt_texts.len(), 2);
    }

    #[test]
    fn assemble_prefers_extracted_canonical() {
        let article = Article::from_extraction(
            Some("Title here".to_string()),
            "Body text for the article.",
            Some("https://news.example.com/story/123".to_string()),
        )
        .unwrap();
        let draft = SuggestionDraft::heuristic(&article);

        let bundle = SuggestionBundle::assemble(
            ArticleId::generate(ArticleOrigin::Url),
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

        assert_eq!(bundle.canonical_url, "https://news.example.com/story/123");
    }

    #[test]
    fn bundle_serializes_and_deserializes() {
        let article = sample_article();
        let bundle = SuggestionBundle::assemble(
            ArticleId::generate(ArticleOrigin::Pasted),
            &article,
            SuggestionDraft::heuristic(&article),
            Section::Rajasthan,
            "Desk",
            "Example Times",
            "https://example.com",
            2,
            vec![InternalLink::new("Jaipur News", "https://example.com/jaipur/")],
            Utc::now(),
        );

        let json = serde_json::to_string(&bundle).unwrap();
        let back: SuggestionBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
