//! Bundle Exporter Port - Format conversion interface for suggestion bundles.
//!
//! This port defines the contract for rendering a suggestion bundle into the
//! downloadable formats the desk works with (DOCX brief, HTML head snippet,
//! JSON-LD, CSV row).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::seo::SuggestionBundle;

/// Port for exporting a suggestion bundle to a downloadable format.
pub trait BundleExporter: Send + Sync {
    /// Render `bundle` in the given format.
    fn export(
        &self,
        bundle: &SuggestionBundle,
        format: ExportFormat,
    ) -> Result<ExportedBundle, ExportError>;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Word document with the full editorial brief.
    Docx,
    /// HTML `<head>` snippet (title, meta, canonical, JSON-LD).
    Html,
    /// Standalone schema.org NewsArticle JSON-LD.
    JsonLd,
    /// One CMS-import CSV row with header.
    Csv,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::JsonLd => "application/ld+json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Html => "html",
            ExportFormat::JsonLd => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Docx => write!(f, "docx"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::JsonLd => write!(f, "json_ld"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docx" | "doc" => Ok(ExportFormat::Docx),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json_ld" | "jsonld" | "json" => Ok(ExportFormat::JsonLd),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported bundle with content and download metadata.
#[derive(Debug, Clone)]
pub struct ExportedBundle {
    /// Rendered content as bytes.
    pub content: Vec<u8>,
    /// MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedBundle {
    /// Creates a new exported bundle named after the article ID.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Rendering the document failed.
    #[error("{format} rendering failed: {message}")]
    RenderFailed {
        /// Format being rendered.
        format: ExportFormat,
        /// Error details.
        message: String,
    },
}

impl ExportError {
    /// Creates a render failure error.
    pub fn render_failed(format: ExportFormat, message: impl Into<String>) -> Self {
        Self::RenderFailed {
            format,
            message: message.into(),
        }
    }
}
