//! Domain layer: article text model, SEO heuristics, and structured data.

pub mod article;
pub mod foundation;
pub mod schema;
pub mod seo;
