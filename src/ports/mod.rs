//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RewriteProvider` - LLM-backed SEO rewriting
//! - `ArticleSource` - URL fetching and article extraction
//! - `BundleExporter` - Rendering bundles to downloadable formats

mod article_source;
mod exporter;
mod rewrite_provider;

pub use article_source::{ArticleSource, ExtractError, ExtractedArticle};
pub use exporter::{BundleExporter, ExportError, ExportFormat, ExportedBundle};
pub use rewrite_provider::{RewriteError, RewriteProvider, RewriterInfo};
