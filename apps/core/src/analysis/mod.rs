//! # Analysis Module
//!
//! Fast, non-LLM heuristics for TextSight. Everything here is pure and
//! deterministic: the same input text always produces the same report.
//!
//! ## Components
//! - `metrics`: word/sentence counts, length and diversity figures, signal counts
//! - `keywords`: stopword-filtered keyword extraction by frequency ranking
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod keywords;
pub mod metrics;
pub mod report;

pub use analyzer::TextAnalyzer;
pub use keywords::{KeywordExtractor, KeywordHit};
pub use metrics::{MetricsScanner, TextMetrics};
pub use report::TextReport;
