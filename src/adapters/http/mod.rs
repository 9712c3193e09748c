//! HTTP adapters - REST API implementations.

pub mod articles;

pub use articles::articles_router;
pub use articles::ArticlesAppState;
