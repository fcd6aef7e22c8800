//! Scam Detect API Server
//!
//! Scores URLs for phishing with a model loaded once at startup.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    SCAM DETECT API                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  POST /predict ──► spawn_blocking ──► ScoringService     │
//! │                                        │                 │
//! │                    features::extract ◄─┤                 │
//! │                    Arc<dyn Model>    ◄─┘                 │
//! │  GET /health, GET /model                                 │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    BoxError,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use tower::{timeout::{error::Elapsed, TimeoutLayer}, ServiceBuilder};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scam_detect_core::{load_model, ScoringService};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!(
        "{} API v{} starting ({})",
        scam_detect_core::constants::APP_NAME,
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // Load the model before binding; a server without one must not start
    let model = load_model(&config.model_path, config.model_sha256.as_deref())
        .with_context(|| format!("Failed to load model from {}", config.model_path))?;

    // Build application state
    let state = AppState {
        service: Arc::new(ScoringService::new(model)),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Initialize logging. Records from the core crate's `log` calls are
/// forwarded through the subscriber's log bridge.
fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scam_detect_api=debug,scam_detect_core=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ScoringService>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .route("/model", get(handlers::model::info))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout))
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

/// Errors raised by the middleware stack, answered in the JSON error shape
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::InternalError(format!("Unhandled middleware error: {}", err))
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
