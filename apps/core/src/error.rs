use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents a failed outbound HTTP request to the model server.
    #[error("Model server request failed: {0}")]
    Http(String),

    /// Represents a model server response with a non-success status code.
    #[error("Model server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Represents data validation errors (e.g., a reply body that fails to decode).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// Short failure-kind label surfaced to clients as an insight line.
    pub fn kind(&self) -> String {
        match self {
            AppError::Http(_) => "connection".to_string(),
            AppError::Status { status, .. } => format!("status {}", status),
            AppError::Validation(_) => "decode".to_string(),
            AppError::Config(_) => "config".to_string(),
            AppError::Timeout(_) => "timeout".to_string(),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Http(err.to_string())
        }
    }
}
