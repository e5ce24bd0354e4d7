//! # Ollama Module
//!
//! Best-effort enrichment against a locally running Ollama-compatible model
//! server. Failures here never fail a request: they degrade to at most one
//! informational insight line, and the heuristic result is never altered.
//!
//! ## Components
//! - `client`: HTTP client for `/api/tags` and `/api/generate`
//! - `reply`: tagged parse of the model's JSON-ish reply
//! - `enrich`: merge rules applying a reply to a report

pub mod client;
pub mod enrich;
pub mod reply;

pub use client::OllamaClient;
pub use enrich::enrich_report;
pub use reply::ModelReply;

/// Build the fixed analyst prompt for a text.
pub(crate) fn build_prompt(text: &str) -> String {
    format!(
        "You are an analyst. Given the text, produce:\n\
         1) One-sentence summary\n\
         2) 3-5 concise, data-driven insights (mention any numbers, entities, claims)\n\
         Return STRICT JSON with keys: summary (string), insights (array of strings).\n\n\
         TEXT:\n{text}\n"
    )
}
