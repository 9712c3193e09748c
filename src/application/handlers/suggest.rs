//! Shared suggestion assembly used by both analysis handlers.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::PublicationConfig;
use crate::domain::article::Article;
use crate::domain::foundation::{ArticleId, ArticleOrigin, Section};
use crate::domain::seo::{LinkCatalog, SuggestionBundle, SuggestionDraft};
use crate::ports::RewriteProvider;

/// Per-request publication context.
///
/// Starts from the configured publication defaults; the HTTP layer
/// overrides individual fields from the request.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    /// Editorial section.
    pub section: Section,
    /// Byline.
    pub author: String,
    /// Publisher organization.
    pub publisher: String,
    /// Base URL used when no canonical is known.
    pub canonical_base: String,
    /// Number of alt-text suggestions.
    pub alt_text_count: usize,
}

impl SuggestionContext {
    /// Builds a context from the publication defaults.
    pub fn from_publication(publication: &PublicationConfig, section: Section) -> Self {
        Self {
            section,
            author: publication.default_author.clone(),
            publisher: publication.publisher.clone(),
            canonical_base: publication.canonical_base_trimmed().to_string(),
            alt_text_count: publication.alt_text_count,
        }
    }
}

/// Derives a draft, preferring the rewriter when one is configured.
///
/// Rewriter failure is never surfaced to the caller; the heuristics take
/// over and the failure is logged.
pub(crate) async fn derive_draft(
    rewriter: Option<&Arc<dyn RewriteProvider>>,
    article: &Article,
) -> SuggestionDraft {
    match rewriter {
        Some(provider) => match provider.rewrite(article).await {
            Ok(plan) => {
                debug!(provider = %provider.provider_info().model, "rewrite plan received");
                plan.fill_gaps(article)
            }
            Err(err) => {
                warn!(error = %err, "rewrite failed, falling back to heuristics");
                SuggestionDraft::heuristic(article)
            }
        },
        None => SuggestionDraft::heuristic(article),
    }
}

/// Builds the complete bundle for one article.
pub(crate) async fn build_bundle(
    rewriter: Option<&Arc<dyn RewriteProvider>>,
    links: &LinkCatalog,
    article: &Article,
    origin: ArticleOrigin,
    ctx: &SuggestionContext,
) -> SuggestionBundle {
    let draft = derive_draft(rewriter, article).await;

    SuggestionBundle::assemble(
        ArticleId::generate(origin),
        article,
        draft,
        ctx.section,
        ctx.author.clone(),
        ctx.publisher.clone(),
        &ctx.canonical_base,
        ctx.alt_text_count,
        links.for_section(ctx.section).to_vec(),
        Utc::now(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockRewriteError, MockRewriter};

    fn article() -> Article {
        Article::from_pasted(
            "Congress rally in Jaipur\nThe Congress held a large rally in Jaipur on Sunday. \
             Leaders spoke about the upcoming elections.",
        )
        .unwrap()
    }

    fn ctx() -> SuggestionContext {
        SuggestionContext::from_publication(&PublicationConfig::default(), Section::Rajasthan)
    }

    #[tokio::test]
    async fn no_rewriter_uses_heuristics() {
        let draft = derive_draft(None, &article()).await;
        assert!(!draft.title.is_empty());
    }

    #[tokio::test]
    async fn rewriter_plan_is_gap_filled() {
        let plan = SuggestionDraft {
            title: "AI Title".to_string(),
            ..Default::default()
        };
        let rewriter: Arc<dyn RewriteProvider> = Arc::new(MockRewriter::new().with_plan(plan));

        let draft = derive_draft(Some(&rewriter), &article()).await;
        assert_eq!(draft.title, "AI Title");
        assert!(!draft.meta.is_empty());
    }

    #[tokio::test]
    async fn rewriter_failure_falls_back_to_heuristics() {
        let rewriter: Arc<dyn RewriteProvider> =
            Arc::new(MockRewriter::new().with_error(MockRewriteError::Unavailable {
                message: "down".to_string(),
            }));

        let draft = derive_draft(Some(&rewriter), &article()).await;
        assert!(!draft.title.is_empty());
        assert!(!draft.slug.is_empty());
    }

    #[tokio::test]
    async fn bundle_carries_section_links() {
        let links = LinkCatalog::defaults();
        let bundle = build_bundle(None, &links, &article(), ArticleOrigin::Pasted, &ctx()).await;

        assert_eq!(bundle.section, Section::Rajasthan);
        assert_eq!(bundle.internal_links.len(), 1);
        assert!(bundle.id.as_str().starts_with("PASTEART-"));
    }
}
