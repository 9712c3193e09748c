//! SEO Desk server entry point.
//!
//! Loads configuration, wires the adapters into the application handlers,
//! and serves the articles API.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seo_desk::adapters::ai::{OpenAiRewriter, OpenAiRewriterConfig};
use seo_desk::adapters::export::DeskExporter;
use seo_desk::adapters::extract::HtmlExtractor;
use seo_desk::adapters::http::{articles_router, ArticlesAppState};
use seo_desk::application::{AnalyzePastedHandler, AnalyzeUrlsHandler, ExportBundleHandler};
use seo_desk::config::AppConfig;
use seo_desk::domain::seo::LinkCatalog;
use seo_desk::ports::{ArticleSource, RewriteProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        environment = config.server.environment.as_str(),
        "starting seo-desk"
    );

    let rewriter = build_rewriter(&config);
    let source: Arc<dyn ArticleSource> = Arc::new(HtmlExtractor::new(
        config.fetch.user_agent.clone(),
        config.fetch.timeout(),
    )?);

    let state = ArticlesAppState {
        analyze_pasted: Arc::new(AnalyzePastedHandler::new(
            rewriter.clone(),
            LinkCatalog::defaults(),
        )),
        analyze_urls: Arc::new(AnalyzeUrlsHandler::new(
            source,
            rewriter.clone(),
            LinkCatalog::defaults(),
            config.fetch.min_body_words,
        )),
        export: Arc::new(ExportBundleHandler::new(Arc::new(DeskExporter::new()))),
        publication: config.publication.clone(),
        rewriter_enabled: rewriter.is_some(),
    };

    let app = articles_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "seo-desk listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the optional OpenAI rewriter from configuration.
fn build_rewriter(config: &AppConfig) -> Option<Arc<dyn RewriteProvider>> {
    if !config.ai.is_enabled() {
        info!("no OpenAI API key configured; heuristics only");
        return None;
    }

    let key = config.ai.openai_api_key.clone()?;
    let rewriter_config = OpenAiRewriterConfig::from_key(key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries)
        .with_max_tokens(config.ai.max_tokens);

    match OpenAiRewriter::new(rewriter_config) {
        Ok(rewriter) => {
            info!(model = %config.ai.model, "AI rewriter enabled");
            Some(Arc::new(rewriter))
        }
        Err(err) => {
            warn!(error = %err, "failed to build AI rewriter; heuristics only");
            None
        }
    }
}

/// Builds the CORS layer from configured origins.
///
/// No configured origins means permissive CORS, which suits local
/// editorial tooling; production deployments should set origins.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
