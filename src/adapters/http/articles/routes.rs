//! Axum router configuration for article endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_pasted, analyze_urls, export_bundle, health, ArticlesAppState};

/// Create the articles API router.
///
/// # Routes
///
/// - `POST /api/articles/analyze` - Analyze pasted article text
/// - `POST /api/articles/analyze-urls` - Analyze published article URLs
/// - `POST /api/export` - Export a bundle to DOCX/HTML/JSON-LD/CSV
/// - `GET /health` - Health check
pub fn articles_router() -> Router<ArticlesAppState> {
    Router::new()
        .route("/api/articles/analyze", post(analyze_pasted))
        .route("/api/articles/analyze-urls", post(analyze_urls))
        .route("/api/export", post(export_bundle))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_constructs() {
        let _router = articles_router();
    }
}
