//! AI Rewriter Adapters.
//!
//! Implementations of the RewriteProvider port.
//!
//! - `OpenAiRewriter` - OpenAI chat completions
//! - `MockRewriter` - Configurable mock for testing

mod mock_rewriter;
mod openai_rewriter;

pub use mock_rewriter::{MockRewrite, MockRewriteError, MockRewriter};
pub use openai_rewriter::{OpenAiRewriter, OpenAiRewriterConfig};
