//! Application layer - Handlers orchestrating domain operations.
//!
//! Handlers coordinate between the domain heuristics, the rewrite provider,
//! the article source, and the exporters.

pub mod handlers;

pub use handlers::{
    AnalyzePastedHandler, AnalyzeUrlsHandler, ExportBundleHandler, SuggestionContext, UrlAnalysis,
};
