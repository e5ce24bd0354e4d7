//! Merge rules for model enrichment.
//!
//! Applies one model generation to an existing heuristic report. Heuristic
//! insights are never removed or reordered; enrichment only overrides the
//! summary or appends lines at the end.

use serde_json::Value;
use tracing::warn;

use crate::analysis::TextReport;
use crate::config::Config;

use super::build_prompt;
use super::client::OllamaClient;
use super::reply::ModelReply;

/// Longest raw-output excerpt surfaced as an insight line.
const RAW_EXCERPT_MAX_CHARS: usize = 400;

/// Best-effort enrichment of a heuristic report.
///
/// Skipped silently when the text is empty or no model resolves. A failed
/// generation appends exactly one line naming the failure kind and leaves the
/// rest of the report untouched.
pub async fn enrich_report(
    client: &OllamaClient,
    config: &Config,
    text: &str,
    report: &mut TextReport,
) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let Some(model) = client.resolve_model(config).await else {
        return;
    };

    match client
        .generate(&model, &build_prompt(text), config.generate_timeout)
        .await
    {
        Ok(raw) => apply_reply(report, &model, &raw),
        Err(e) => {
            warn!("Model enrichment failed: {}", e);
            report.push_insight(format!("Ollama call failed: {}", e.kind()));
        }
    }
}

/// Merge one raw model reply into the report.
///
/// A parsed object may override the summary (non-empty string only) and
/// append its `insights` strings in order. Anything else (no object, or an
/// object without an `insights` array) appends a truncated raw excerpt so
/// the caller still sees what the model said.
pub fn apply_reply(report: &mut TextReport, model: &str, raw: &str) {
    match ModelReply::parse(raw) {
        ModelReply::Parsed(object) => {
            let summary = object
                .get("summary")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty());
            if let Some(summary) = summary {
                report.summary = summary.to_string();
            }

            match object.get("insights") {
                Some(Value::Array(items)) => {
                    for item in items {
                        if let Some(line) = item.as_str() {
                            let line = line.trim();
                            if !line.is_empty() {
                                report.push_insight(line);
                            }
                        }
                    }
                }
                _ => report.push_insight(raw_excerpt_line(model, raw)),
            }
        }
        ModelReply::Unparsed(raw_text) => {
            report.push_insight(raw_excerpt_line(model, &raw_text));
        }
    }
}

fn raw_excerpt_line(model: &str, raw: &str) -> String {
    let excerpt: String = raw.chars().take(RAW_EXCERPT_MAX_CHARS).collect();
    format!("Ollama ({}) output: {}", model, excerpt)
}
