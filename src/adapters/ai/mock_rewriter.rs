//! Mock Rewrite Provider for testing.
//!
//! Configurable mock implementation of the RewriteProvider port, allowing
//! tests to run without calling a real LLM API. Supports queued plans,
//! error injection, simulated delays, and call tracking.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::article::Article;
use crate::domain::seo::SuggestionDraft;
use crate::ports::{RewriteError, RewriteProvider, RewriterInfo};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockRewrite {
    /// Return this plan.
    Plan(SuggestionDraft),
    /// Fail with this error kind.
    Error(MockRewriteError),
}

/// Injectable error kinds.
#[derive(Debug, Clone)]
pub enum MockRewriteError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate a network error.
    Network { message: String },
    /// Simulate unparseable model output.
    Parse { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockRewriteError> for RewriteError {
    fn from(err: MockRewriteError) -> Self {
        match err {
            MockRewriteError::RateLimited { retry_after_secs } => {
                RewriteError::rate_limited(retry_after_secs)
            }
            MockRewriteError::Unavailable { message } => RewriteError::unavailable(message),
            MockRewriteError::AuthenticationFailed => RewriteError::AuthenticationFailed,
            MockRewriteError::Network { message } => RewriteError::network(message),
            MockRewriteError::Parse { message } => RewriteError::parse(message),
            MockRewriteError::Timeout { timeout_secs } => RewriteError::Timeout { timeout_secs },
        }
    }
}

/// Mock rewrite provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockRewriter {
    /// Queued outcomes (consumed in order; empty queue means error).
    outcomes: Arc<Mutex<VecDeque<MockRewrite>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Articles this mock was called with, for verification.
    calls: Arc<Mutex<Vec<Article>>>,
}

impl MockRewriter {
    /// Creates a new mock with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful plan.
    pub fn with_plan(self, plan: SuggestionDraft) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockRewrite::Plan(plan));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockRewriteError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockRewrite::Error(error));
        self
    }

    /// Sets simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Articles this mock has been asked to rewrite.
    pub fn calls(&self) -> Vec<Article> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of rewrite calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RewriteProvider for MockRewriter {
    async fn rewrite(&self, article: &Article) -> Result<SuggestionDraft, RewriteError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.calls.lock().unwrap().push(article.clone());

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockRewrite::Plan(plan)) => Ok(plan),
            Some(MockRewrite::Error(err)) => Err(err.into()),
            None => Err(RewriteError::unavailable("no mock outcomes queued")),
        }
    }

    fn provider_info(&self) -> RewriterInfo {
        RewriterInfo::new("mock", "mock-rewriter-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::from_pasted("Headline here\nBody of the test article with enough words.").unwrap()
    }

    #[tokio::test]
    async fn returns_queued_plans_in_order() {
        let first = SuggestionDraft {
            title: "First".to_string(),
            ..Default::default()
        };
        let second = SuggestionDraft {
            title: "Second".to_string(),
            ..Default::default()
        };
        let mock = MockRewriter::new().with_plan(first).with_plan(second);

        assert_eq!(mock.rewrite(&article()).await.unwrap().title, "First");
        assert_eq!(mock.rewrite(&article()).await.unwrap().title, "Second");
    }

    #[tokio::test]
    async fn injected_errors_map_to_rewrite_errors() {
        let mock = MockRewriter::new().with_error(MockRewriteError::RateLimited {
            retry_after_secs: 10,
        });

        let err = mock.rewrite(&article()).await.unwrap_err();
        assert!(matches!(err, RewriteError::RateLimited { retry_after_secs: 10 }));
    }

    #[tokio::test]
    async fn empty_queue_is_unavailable() {
        let mock = MockRewriter::new();
        let err = mock.rewrite(&article()).await.unwrap_err();
        assert!(matches!(err, RewriteError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn tracks_calls() {
        let mock = MockRewriter::new().with_plan(SuggestionDraft::default());
        let a = article();
        let _ = mock.rewrite(&a).await;

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].body, a.body);
    }
}
