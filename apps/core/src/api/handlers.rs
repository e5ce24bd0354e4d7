//! Request handlers for the analyze API.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::info;

use crate::analysis::TextAnalyzer;
use crate::config::Config;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::ollama::{enrich_report, OllamaClient};

/// Shared per-process state. Everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TextAnalyzer>,
    pub ollama: OllamaClient,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state from a loaded configuration.
    pub fn new(config: Config) -> Self {
        let ollama = OllamaClient::new(config.ollama_url.clone());
        Self {
            analyzer: Arc::new(TextAnalyzer::new()),
            ollama,
            config: Arc::new(config),
        }
    }
}

/// `POST /analyze`: heuristic analysis plus best-effort model enrichment.
///
/// Never fails for a well-formed body: enrichment problems surface only as
/// insight lines.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let mut report = state.analyzer.analyze(&req.text);
    info!("Heuristic analysis done, {}", report.describe());

    enrich_report(&state.ollama, &state.config, &req.text, &mut report).await;

    Json(report.into_response())
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
