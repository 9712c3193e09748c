//! AnalyzeUrlsHandler - Suggestion bundles for published article URLs.
//!
//! URLs are fetched concurrently. A failing URL never sinks the batch;
//! its error travels back alongside the successful bundles.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::domain::article::Article;
use crate::domain::foundation::{ArticleOrigin, DomainError, ErrorCode};
use crate::domain::seo::{LinkCatalog, SuggestionBundle};
use crate::ports::{ArticleSource, RewriteProvider};

use super::suggest::{build_bundle, SuggestionContext};

/// Per-URL analysis outcome.
#[derive(Debug)]
pub struct UrlAnalysis {
    /// The URL that was analyzed.
    pub url: String,
    /// The bundle, or why this URL failed.
    pub result: Result<SuggestionBundle, DomainError>,
}

/// Handles URL-mode analysis requests.
pub struct AnalyzeUrlsHandler {
    source: Arc<dyn ArticleSource>,
    rewriter: Option<Arc<dyn RewriteProvider>>,
    links: LinkCatalog,
    min_body_words: usize,
}

impl AnalyzeUrlsHandler {
    /// Creates a new handler.
    pub fn new(
        source: Arc<dyn ArticleSource>,
        rewriter: Option<Arc<dyn RewriteProvider>>,
        links: LinkCatalog,
        min_body_words: usize,
    ) -> Self {
        Self {
            source,
            rewriter,
            links,
            min_body_words,
        }
    }

    /// Analyzes every URL, concurrently, with per-URL failure isolation.
    ///
    /// Returns `INVALID_FORMAT` only when no URLs were given at all.
    pub async fn handle(
        &self,
        urls: &[String],
        ctx: &SuggestionContext,
    ) -> Result<Vec<UrlAnalysis>, DomainError> {
        if urls.is_empty() {
            return Err(DomainError::new(ErrorCode::InvalidFormat, "No URLs provided"));
        }

        info!(count = urls.len(), section = %ctx.section, "analyzing article urls");

        let analyses = join_all(urls.iter().map(|url| self.analyze_one(url, ctx))).await;
        Ok(analyses)
    }

    async fn analyze_one(&self, url: &str, ctx: &SuggestionContext) -> UrlAnalysis {
        let result = self.try_analyze(url, ctx).await;
        if let Err(ref err) = result {
            warn!(url, error = %err, "url analysis failed");
        }
        UrlAnalysis {
            url: url.to_string(),
            result,
        }
    }

    async fn try_analyze(
        &self,
        url: &str,
        ctx: &SuggestionContext,
    ) -> Result<SuggestionBundle, DomainError> {
        let extracted = self
            .source
            .fetch(url)
            .await
            .map_err(|e| DomainError::new(ErrorCode::ExtractionFailed, e.to_string()))?;

        let article = Article::from_extraction(extracted.title, &extracted.body, extracted.canonical)?;

        if article.body_words() < self.min_body_words {
            return Err(DomainError::body_too_short(
                article.body_words(),
                self.min_body_words,
            ));
        }

        Ok(build_bundle(
            self.rewriter.as_ref(),
            &self.links,
            &article,
            ArticleOrigin::Url,
            ctx,
        )
        .await)
    }
}
