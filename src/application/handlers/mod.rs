//! Analysis and export handlers.

mod analyze_pasted;
mod analyze_urls;
mod export_bundle;
mod suggest;

pub use analyze_pasted::AnalyzePastedHandler;
pub use analyze_urls::{AnalyzeUrlsHandler, UrlAnalysis};
pub use export_bundle::ExportBundleHandler;
pub use suggest::SuggestionContext;
