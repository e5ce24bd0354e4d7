//! Text Analyzer - Main orchestrator for the analysis module.
//!
//! Runs the metrics scanner and keyword extractor over the input, then turns
//! the figures into insight lines and a threshold-based summary. Pure and
//! deterministic; enrichment happens elsewhere.

use super::keywords::KeywordExtractor;
use super::metrics::MetricsScanner;
use super::report::TextReport;

/// Word-count ceiling for the "too little context" summary.
pub(crate) const SHORT_TEXT_MAX_WORDS: usize = 8;

/// Word-count ceiling for the "snapshot" summary.
pub(crate) const SNAPSHOT_MAX_WORDS: usize = 60;

/// Summary for texts of at most [`SHORT_TEXT_MAX_WORDS`] words.
pub(crate) const SUMMARY_SHORT: &str = "Too little context for deep analysis";

/// Summary for texts of at most [`SNAPSHOT_MAX_WORDS`] words.
pub(crate) const SUMMARY_SNAPSHOT: &str = "Quick, data-driven snapshot";

/// Summary for longer texts.
pub(crate) const SUMMARY_DEEP: &str = "Deeper signals detected";

/// Main analyzer that orchestrates the heuristic components.
pub struct TextAnalyzer {
    scanner: MetricsScanner,
    keyword_extractor: KeywordExtractor,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Create a new analyzer with default settings.
    pub fn new() -> Self {
        Self {
            scanner: MetricsScanner::new(),
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Analyze a text and produce a full report.
    pub fn analyze(&self, text: &str) -> TextReport {
        let text = text.trim();

        // 1. Raw counting signals
        let metrics = self.scanner.scan(text);

        // 2. Keyword ranking
        let keywords = self.keyword_extractor.extract(text);

        // 3. Insight lines, mandatory counts first
        let mut insights = vec![
            format!("Word count: {}", metrics.word_count),
            format!("Character count: {}", metrics.char_count),
        ];

        if metrics.sentence_count > 0 && metrics.word_count > 0 {
            insights.push(format!("Sentence count: {}", metrics.sentence_count));
            insights.push(format!(
                "Avg words/sentence: {:.1}",
                metrics.word_count as f64 / metrics.sentence_count as f64
            ));
        }

        if metrics.alpha_token_count > 0 {
            insights.push(format!("Avg word length: {:.1} chars", metrics.avg_word_length));
            insights.push(format!(
                "Lexical diversity: {:.2} (unique/total)",
                metrics.lexical_diversity
            ));
        }

        if !keywords.is_empty() {
            let joined: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
            insights.push(format!("Top keywords: {}", joined.join(", ")));
        }

        if metrics.digit_token_count > 0 {
            insights.push(format!(
                "Contains {} token(s) with digits (potential data points).",
                metrics.digit_token_count
            ));
        }

        if metrics.url_count > 0 {
            insights.push(format!(
                "Contains {} URL(s) (may reference sources).",
                metrics.url_count
            ));
        }

        if metrics.question_count > 0 {
            insights.push(format!(
                "Contains {} question(s) — likely seeking an answer or decision.",
                metrics.question_count
            ));
        }

        if metrics.word_count > 0 {
            insights.push(format!(
                "Estimated reading time: {:.1} min (@200 wpm)",
                metrics.reading_time_min
            ));
        }

        // 4. Summary from word-count thresholds, each with one closing insight
        let summary = if metrics.word_count <= SHORT_TEXT_MAX_WORDS {
            insights.push(
                "This is short text; include a full paragraph for stronger, more reliable insights."
                    .to_string(),
            );
            SUMMARY_SHORT
        } else if metrics.word_count <= SNAPSHOT_MAX_WORDS {
            insights.push(
                "This is moderate-length text; insights focus on keywords, structure, and signals (numbers/questions/links)."
                    .to_string(),
            );
            SUMMARY_SNAPSHOT
        } else {
            insights.push(
                "This is longer text; next step is extracting claims, evidence, and a concise structured summary."
                    .to_string(),
            );
            SUMMARY_DEEP
        };

        TextReport {
            summary: summary.to_string(),
            insights,
            metrics,
            keywords,
        }
    }
}
