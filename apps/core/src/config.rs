//! Runtime configuration loaded from the environment.
//!
//! Read once at startup and treated as immutable afterwards. A `.env` file is
//! honored via `dotenv` before any variable is read.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Default Ollama-compatible model server address.
const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default HTTP bind address for the analyze API.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default model generation timeout in seconds.
const DEFAULT_TIMEOUT_S: f64 = 60.0;

/// Cap applied to model discovery so a slow server cannot stall every request
/// for the full generation timeout.
const DISCOVERY_CAP: Duration = Duration::from_secs(5);

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`TEXTSIGHT_ADDR`).
    pub bind_addr: String,
    /// Base URL of the model server (`OLLAMA_URL`), without trailing slash.
    pub ollama_url: String,
    /// Explicit model name (`OLLAMA_MODEL`); skips discovery when set.
    pub model_override: Option<String>,
    /// Timeout for the generation call (`OLLAMA_TIMEOUT_S`, seconds, fractional allowed).
    pub generate_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            env::var("TEXTSIGHT_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let ollama_url = env::var("OLLAMA_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());

        let model_override = env::var("OLLAMA_MODEL")
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let generate_timeout = match env::var("OLLAMA_TIMEOUT_S") {
            Ok(raw) => {
                let secs: f64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("OLLAMA_TIMEOUT_S is not a number: {:?}", raw))
                })?;
                if !secs.is_finite() || secs <= 0.0 {
                    return Err(AppError::Config(format!(
                        "OLLAMA_TIMEOUT_S must be a positive number of seconds, got {:?}",
                        raw
                    )));
                }
                Duration::from_secs_f64(secs)
            }
            Err(_) => Duration::from_secs_f64(DEFAULT_TIMEOUT_S),
        };

        Ok(Self {
            bind_addr,
            ollama_url,
            model_override,
            generate_timeout,
        })
    }

    /// Timeout for the model list call: the generation timeout, capped at 5 s.
    pub fn discovery_timeout(&self) -> Duration {
        self.generate_timeout.min(DISCOVERY_CAP)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model_override: None,
            generate_timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_S),
        }
    }
}
