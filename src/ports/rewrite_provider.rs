//! Rewrite Provider Port - Interface for LLM-backed SEO rewriting.
//!
//! This port abstracts the AI rewriter so the application layer can request
//! an SEO rewrite plan without coupling to a specific provider. When no
//! provider is configured (or the provider fails), callers fall back to the
//! local heuristics.

use async_trait::async_trait;

use crate::domain::article::Article;
use crate::domain::seo::SuggestionDraft;

/// Port for AI-assisted SEO rewriting.
///
/// Implementations call an external LLM and translate its output into a
/// [`SuggestionDraft`]. Errors are classified so callers can decide whether
/// retrying makes sense.
#[async_trait]
pub trait RewriteProvider: Send + Sync {
    /// Produce an SEO rewrite plan for the article.
    ///
    /// The returned draft may have empty fields; callers back-fill them
    /// from the heuristics.
    async fn rewrite(&self, article: &Article) -> Result<SuggestionDraft, RewriteError>;

    /// Provider name and model, for logging.
    fn provider_info(&self) -> RewriterInfo;
}

/// Provider identification, used in logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterInfo {
    /// Provider name (e.g. "openai").
    pub name: String,
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
}

impl RewriterInfo {
    /// Creates new rewriter info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Rewrite provider errors.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Article exceeds the model's context window.
    #[error("article too long for model context")]
    ContextTooLong,

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response into a rewrite plan.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl RewriteError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RewriteError::RateLimited { .. }
                | RewriteError::Unavailable { .. }
                | RewriteError::Network(_)
                | RewriteError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(RewriteError::rate_limited(30).is_retryable());
        assert!(RewriteError::unavailable("down").is_retryable());
        assert!(RewriteError::network("reset").is_retryable());
        assert!(RewriteError::Timeout { timeout_secs: 60 }.is_retryable());

        assert!(!RewriteError::AuthenticationFailed.is_retryable());
        assert!(!RewriteError::ContextTooLong.is_retryable());
        assert!(!RewriteError::parse("bad json").is_retryable());
        assert!(!RewriteError::InvalidRequest("no".to_string()).is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            RewriteError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            RewriteError::Timeout { timeout_secs: 60 }.to_string(),
            "request timed out after 60s"
        );
    }

    #[test]
    fn rewriter_info_holds_name_and_model() {
        let info = RewriterInfo::new("openai", "gpt-4o-mini");
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o-mini");
    }
}
