//! Articles HTTP adapter - REST API for analysis and export.
//!
//! Provides endpoints for:
//! - Analyzing pasted article text
//! - Analyzing published article URLs
//! - Exporting suggestion bundles

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::ArticlesAppState;
pub use routes::articles_router;
