//! HTTP handlers for article analysis and export endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::adapters::export::{render_html_snippet, render_json_ld};
use crate::application::{
    AnalyzePastedHandler, AnalyzeUrlsHandler, ExportBundleHandler, SuggestionContext,
};
use crate::config::{PublicationConfig, MAX_ALT_TEXT_COUNT};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::seo::SuggestionBundle;

use super::dto::{
    AnalyzePastedRequest, AnalyzePastedResponse, AnalyzeUrlsRequest, AnalyzeUrlsResponse,
    ArticleReport, ErrorBody, ExportRequest, ExportResponse, HealthResponse,
    PublicationOverrides, UrlOutcome,
};

/// Application state for article endpoints.
#[derive(Clone)]
pub struct ArticlesAppState {
    /// Paste-mode analysis handler.
    pub analyze_pasted: Arc<AnalyzePastedHandler>,
    /// URL-mode analysis handler.
    pub analyze_urls: Arc<AnalyzeUrlsHandler>,
    /// Export handler.
    pub export: Arc<ExportBundleHandler>,
    /// Publication defaults for requests without overrides.
    pub publication: PublicationConfig,
    /// Whether an AI rewriter is configured (health reporting).
    pub rewriter_enabled: bool,
}

impl ArticlesAppState {
    /// Builds the per-request context from defaults plus overrides.
    fn context(&self, overrides: &PublicationOverrides) -> SuggestionContext {
        let section = overrides
            .section
            .unwrap_or(self.publication.default_section);
        let mut ctx = SuggestionContext::from_publication(&self.publication, section);

        if let Some(ref author) = overrides.author {
            ctx.author = author.clone();
        }
        if let Some(ref publisher) = overrides.publisher {
            ctx.publisher = publisher.clone();
        }
        if let Some(ref base) = overrides.canonical_base {
            ctx.canonical_base = base.trim_end_matches('/').to_string();
        }
        if let Some(count) = overrides.alt_text_count {
            // Requests get the same bound the config enforces.
            ctx.alt_text_count = count.clamp(1, MAX_ALT_TEXT_COUNT);
        }
        ctx
    }
}

/// Analyze pasted article text.
///
/// POST /api/articles/analyze
pub async fn analyze_pasted(
    State(state): State<ArticlesAppState>,
    Json(request): Json<AnalyzePastedRequest>,
) -> impl IntoResponse {
    let ctx = state.context(&request.overrides);

    let bundles = match state.analyze_pasted.handle(&request.text, &ctx).await {
        Ok(bundles) => bundles,
        Err(err) => return error_response(err),
    };

    let reports: Result<Vec<ArticleReport>, DomainError> =
        bundles.into_iter().map(article_report).collect();

    match reports {
        Ok(reports) => (
            StatusCode::OK,
            Json(AnalyzePastedResponse {
                count: reports.len(),
                reports,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Analyze published article URLs.
///
/// POST /api/articles/analyze-urls
pub async fn analyze_urls(
    State(state): State<ArticlesAppState>,
    Json(request): Json<AnalyzeUrlsRequest>,
) -> impl IntoResponse {
    let ctx = state.context(&request.overrides);

    match state.analyze_urls.handle(&request.urls, &ctx).await {
        Ok(analyses) => {
            let results: Vec<UrlOutcome> = analyses
                .into_iter()
                .map(|analysis| {
                    // Render failures stay per-URL like any other failure.
                    match analysis.result.and_then(article_report) {
                        Ok(report) => UrlOutcome {
                            url: analysis.url,
                            report: Some(report),
                            error: None,
                        },
                        Err(err) => UrlOutcome {
                            url: analysis.url,
                            report: None,
                            error: Some(ErrorBody {
                                code: err.code.to_string(),
                                message: err.message,
                            }),
                        },
                    }
                })
                .collect();

            let succeeded = results.iter().filter(|r| r.report.is_some()).count();
            (
                StatusCode::OK,
                Json(AnalyzeUrlsResponse {
                    count: results.len(),
                    succeeded,
                    results,
                }),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Export a bundle to a downloadable format.
///
/// POST /api/export
pub async fn export_bundle(
    State(state): State<ArticlesAppState>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    match state.export.handle(&request.bundle, request.format) {
        Ok(exported) => (
            StatusCode::OK,
            Json(ExportResponse {
                filename: exported.filename,
                content_type: exported.content_type,
                format: exported.format,
                content_base64: BASE64.encode(&exported.content),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Health check.
///
/// GET /health
pub async fn health(State(state): State<ArticlesAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        rewriter_enabled: state.rewriter_enabled,
    })
}

/// Builds the analysis report for a bundle: the bundle itself plus the
/// rendered JSON-LD and HTML head snippet.
fn article_report(bundle: SuggestionBundle) -> Result<ArticleReport, DomainError> {
    let json_ld = render_json_ld(&bundle)
        .map_err(|e| DomainError::new(ErrorCode::ExportFailed, e.to_string()))?;
    let html_snippet = render_html_snippet(&bundle)
        .map_err(|e| DomainError::new(ErrorCode::ExportFailed, e.to_string()))?;

    Ok(ArticleReport {
        bundle,
        json_ld,
        html_snippet,
    })
}

/// Maps a domain error onto an HTTP status and error body.
fn error_response(err: DomainError) -> axum::response::Response {
    let status = match err.code {
        ErrorCode::EmptyArticle | ErrorCode::BodyTooShort | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::ExtractionFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::ExportFailed | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorBody {
            code: err.code.to_string(),
            message: err.message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Section;

    fn state_publication() -> PublicationConfig {
        PublicationConfig::default()
    }

    #[test]
    fn context_uses_defaults_when_no_overrides() {
        let state = test_state();
        let ctx = state.context(&PublicationOverrides::default());

        assert_eq!(ctx.section, Section::National);
        assert_eq!(ctx.author, "Patrika News Desk");
        assert_eq!(ctx.alt_text_count, 2);
    }

    #[test]
    fn context_applies_overrides() {
        let state = test_state();
        let overrides = PublicationOverrides {
            section: Some(Section::Sports),
            author: Some("Stringer".to_string()),
            canonical_base: Some("https://other.example.com/".to_string()),
            alt_text_count: Some(4),
            publisher: None,
        };
        let ctx = state.context(&overrides);

        assert_eq!(ctx.section, Section::Sports);
        assert_eq!(ctx.author, "Stringer");
        assert_eq!(ctx.canonical_base, "https://other.example.com");
        assert_eq!(ctx.alt_text_count, 4);
        assert_eq!(ctx.publisher, "Rajasthan Patrika");
    }

    #[test]
    fn context_clamps_alt_text_count_override() {
        let state = test_state();

        let huge = PublicationOverrides {
            alt_text_count: Some(1_000_000_000),
            ..Default::default()
        };
        assert_eq!(state.context(&huge).alt_text_count, MAX_ALT_TEXT_COUNT);

        let zero = PublicationOverrides {
            alt_text_count: Some(0),
            ..Default::default()
        };
        assert_eq!(state.context(&zero).alt_text_count, 1);
    }

    fn test_state() -> ArticlesAppState {
        use crate::adapters::export::DeskExporter;
        use crate::domain::seo::LinkCatalog;
        use crate::ports::{ArticleSource, ExtractError, ExtractedArticle};
        use async_trait::async_trait;

        struct NoSource;

        #[async_trait]
        impl ArticleSource for NoSource {
            async fn fetch(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
                Err(ExtractError::fetch_failed(url, "not wired in this test"))
            }
        }

        ArticlesAppState {
            analyze_pasted: Arc::new(AnalyzePastedHandler::new(None, LinkCatalog::defaults())),
            analyze_urls: Arc::new(AnalyzeUrlsHandler::new(
                Arc::new(NoSource),
                None,
                LinkCatalog::defaults(),
                30,
            )),
            export: Arc::new(ExportBundleHandler::new(Arc::new(DeskExporter::new()))),
            publication: state_publication(),
            rewriter_enabled: false,
        }
    }
}
