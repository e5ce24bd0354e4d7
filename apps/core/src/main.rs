// TextSight V1 Backend Entry Point
// Heuristic text analysis with best-effort local model enrichment.

mod analysis;
mod api;
mod config;
mod error;
mod models;
mod ollama;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tracing::info;

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Model server: {} (model override: {:?}, timeout: {:?})",
        config.ollama_url, config.model_override, config.generate_timeout
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);
    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("TextSight listening on {}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
