//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    EmptyArticle,
    BodyTooShort,
    InvalidFormat,

    // Pipeline errors
    ExtractionFailed,
    ExportFailed,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyArticle => "EMPTY_ARTICLE",
            ErrorCode::BodyTooShort => "BODY_TOO_SHORT",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ExtractionFailed => "EXTRACTION_FAILED",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an empty-article error.
    pub fn empty_article() -> Self {
        Self::new(ErrorCode::EmptyArticle, "Article body is empty")
    }

    /// Creates a body-too-short error.
    pub fn body_too_short(words: usize, min: usize) -> Self {
        Self::new(
            ErrorCode::BodyTooShort,
            format!("Article body has {} words, need at least {}", words, min),
        )
    }
}
