//! AnalyzePastedHandler - Suggestion bundles for pasted article text.
//!
//! A single submission may contain several articles separated by `---`
//! lines; each gets its own bundle.

use std::sync::Arc;

use tracing::info;

use crate::domain::article::Article;
use crate::domain::foundation::{ArticleOrigin, DomainError};
use crate::domain::seo::{LinkCatalog, SuggestionBundle};
use crate::ports::RewriteProvider;

use super::suggest::{build_bundle, SuggestionContext};

/// Handles paste-mode analysis requests.
pub struct AnalyzePastedHandler {
    rewriter: Option<Arc<dyn RewriteProvider>>,
    links: LinkCatalog,
}

impl AnalyzePastedHandler {
    /// Creates a new handler.
    pub fn new(rewriter: Option<Arc<dyn RewriteProvider>>, links: LinkCatalog) -> Self {
        Self { rewriter, links }
    }

    /// Builds one bundle per article in the pasted text.
    ///
    /// Returns `EMPTY_ARTICLE` when the text contains no usable article.
    pub async fn handle(
        &self,
        raw_text: &str,
        ctx: &SuggestionContext,
    ) -> Result<Vec<SuggestionBundle>, DomainError> {
        let articles = Article::split_pasted(raw_text);
        if articles.is_empty() {
            return Err(DomainError::empty_article());
        }

        info!(count = articles.len(), section = %ctx.section, "analyzing pasted articles");

        let mut bundles = Vec::with_capacity(articles.len());
        for article in &articles {
            bundles.push(
                build_bundle(
                    self.rewriter.as_ref(),
                    &self.links,
                    article,
                    ArticleOrigin::Pasted,
                    ctx,
                )
                .await,
            );
        }

        Ok(bundles)
    }
}
