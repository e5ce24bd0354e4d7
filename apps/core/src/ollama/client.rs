//! HTTP client for the local model server.
//!
//! Speaks the Ollama wire API: `GET /api/tags` for installed models and
//! `POST /api/generate` for one-shot, non-streaming generation.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for an Ollama-compatible model server.
#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Resolve the model to use: explicit override, else the first installed tag.
    ///
    /// Discovery failures resolve to `None` so enrichment is skipped rather
    /// than failing the request.
    pub async fn resolve_model(&self, config: &Config) -> Option<String> {
        if let Some(model) = &config.model_override {
            return Some(model.clone());
        }

        match self.list_models(config.discovery_timeout()).await {
            Ok(models) => models.into_iter().next(),
            Err(e) => {
                debug!("Model discovery failed: {}", e);
                None
            }
        }
    }

    /// List installed model names via `GET /api/tags`.
    pub async fn list_models(&self, timeout_after: Duration) -> Result<Vec<String>, AppError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = timeout(timeout_after, self.client.get(&url).send()).await??;
        let response = check_status(response).await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Validation(format!("Tags decode failed: {}", e)))?;

        Ok(tags
            .models
            .into_iter()
            .map(|m| m.name)
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Run one non-streaming generation via `POST /api/generate`.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        timeout_after: Duration,
    ) -> Result<String, AppError> {
        let url = format!("{}/api/generate", self.base_url);
        let payload = serde_json::json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
        });

        let response = timeout(timeout_after, self.client.post(&url).json(&payload).send())
            .await??;
        let response = check_status(response).await?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::Validation(format!("Generate decode failed: {}", e)))?;

        Ok(body.response.trim().to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
