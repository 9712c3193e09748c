//! Data transfer objects for article analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Section;
use crate::domain::seo::SuggestionBundle;
use crate::ports::ExportFormat;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Publication overrides a request may carry.
///
/// Unset fields fall back to the configured publication defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationOverrides {
    /// Editorial section.
    pub section: Option<Section>,
    /// Byline.
    pub author: Option<String>,
    /// Publisher organization.
    pub publisher: Option<String>,
    /// Canonical base URL.
    pub canonical_base: Option<String>,
    /// Number of alt-text suggestions.
    pub alt_text_count: Option<usize>,
}

/// Request to analyze pasted article text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePastedRequest {
    /// Raw article text; multiple articles separated by `---` lines.
    pub text: String,
    /// Publication overrides.
    #[serde(flatten)]
    pub overrides: PublicationOverrides,
}

/// Request to analyze published article URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeUrlsRequest {
    /// URLs to fetch and analyze.
    pub urls: Vec<String>,
    /// Publication overrides.
    #[serde(flatten)]
    pub overrides: PublicationOverrides,
}

/// Request to export a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The bundle to render (as returned by an analyze endpoint).
    pub bundle: SuggestionBundle,
    /// Target format.
    pub format: ExportFormat,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Per-article analysis report: the bundle plus its rendered artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleReport {
    /// The suggestion bundle.
    pub bundle: SuggestionBundle,
    /// Pretty-printed NewsArticle JSON-LD.
    pub json_ld: String,
    /// Paste-ready HTML head snippet.
    pub html_snippet: String,
}

/// Response with analysis reports for pasted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePastedResponse {
    /// Number of reports.
    pub count: usize,
    /// One report per article found in the text.
    pub reports: Vec<ArticleReport>,
}

/// Per-URL analysis outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlOutcome {
    /// The URL that was analyzed.
    pub url: String,
    /// The report, when analysis succeeded.
    pub report: Option<ArticleReport>,
    /// The failure, when it did not.
    pub error: Option<ErrorBody>,
}

/// Response with per-URL outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeUrlsResponse {
    /// Number of URLs analyzed.
    pub count: usize,
    /// Number that produced a bundle.
    pub succeeded: usize,
    /// Outcomes in request order.
    pub results: Vec<UrlOutcome>,
}

/// Response with an exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Suggested filename for download.
    pub filename: String,
    /// MIME content type.
    pub content_type: String,
    /// Format used.
    pub format: ExportFormat,
    /// Rendered content, base64-encoded.
    pub content_base64: String,
}

/// Error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Whether an AI rewriter is configured.
    pub rewriter_enabled: bool,
}
