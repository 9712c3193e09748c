//! Shared value objects used across the domain.

mod errors;
mod ids;
mod section;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ArticleId, ArticleOrigin};
pub use section::Section;
