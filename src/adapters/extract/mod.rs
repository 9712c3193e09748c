//! Article Extraction Adapters.
//!
//! Implementations of the ArticleSource port.

mod html_extractor;

pub use html_extractor::HtmlExtractor;
