//! Analysis report: output structure for text analysis.
//!
//! Carries the wire-facing summary and insight lines along with the structured
//! metrics and keywords they were derived from, so logs and tests can see
//! structure instead of re-parsing strings.

use serde::{Deserialize, Serialize};

use super::keywords::KeywordHit;
use super::metrics::TextMetrics;
use crate::models::AnalyzeResponse;

/// Complete report for one analyzed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReport {
    /// Short summary; heuristic by default, may be overridden by enrichment.
    pub summary: String,

    /// Ordered human-readable insight lines.
    pub insights: Vec<String>,

    /// Raw counting signals the insights were derived from.
    pub metrics: TextMetrics,

    /// Ranked keywords that survived filtering.
    pub keywords: Vec<KeywordHit>,
}

impl TextReport {
    /// Append one insight line.
    pub fn push_insight(&mut self, line: impl Into<String>) {
        self.insights.push(line.into());
    }

    /// Convert into the wire response, dropping the internal structure.
    pub fn into_response(self) -> AnalyzeResponse {
        AnalyzeResponse {
            summary: self.summary,
            insights: self.insights,
        }
    }

    /// One-line description for logging.
    pub fn describe(&self) -> String {
        format!(
            "words: {}, sentences: {}, keywords: {}, insights: {}, summary: {:?}",
            self.metrics.word_count,
            self.metrics.sentence_count,
            self.keywords.len(),
            self.insights.len(),
            self.summary
        )
    }
}
