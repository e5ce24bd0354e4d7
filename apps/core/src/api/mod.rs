//! REST API module using Axum
//!
//! Thin plumbing around the analyzer: one analyze route, a health probe,
//! permissive CORS (browser clients fetch cross-origin during development,
//! and application/json triggers a preflight), and request tracing.

pub mod handlers;

pub use handlers::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the complete application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
