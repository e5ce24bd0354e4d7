use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// The free-form text to analyze. Empty text is valid and degrades to
    /// zeroed metrics rather than an error.
    pub text: String,
}

/// Response body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Short heuristic (or model-provided) summary of the text.
    pub summary: String,
    /// Ordered, human-readable insight lines derived from the text.
    pub insights: Vec<String>,
}
