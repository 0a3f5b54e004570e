//! condense-server library root.
//!
//! The HTTP side of the summarization form. Exposed as a library so the
//! router can be exercised in integration tests with a fake model loader.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use condense_model::Summarizer;
use condense_model::registry::ModelLoader;

use state::AppState;

/// Build the application router.
pub fn router<L>(state: AppState<L>) -> Router
where
    L: ModelLoader + 'static,
    L::Model: Summarizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/models", get(routes::models::list_models::<L>))
        .route("/summarize", post(routes::summarize::summarize::<L>))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

/// Structured JSON logging, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();
}
