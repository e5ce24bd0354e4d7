//! Text metrics extraction.
//!
//! Computes the raw counting signals the analyzer turns into insight lines:
//! word and sentence counts, word-length and diversity figures, and the
//! digit/question/URL signals. All figures degrade to zero on empty input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Word token pattern shared with the keyword extractor.
pub(crate) const WORD_PATTERN: &str = r"[A-Za-z0-9']+";

/// Sentence boundary: terminal punctuation followed by whitespace.
const SENTENCE_PATTERN: &str = r"[.!?]+\s+";

/// URL-ish substrings.
const URL_PATTERN: &str = r"(?i)https?://\S+";

/// Words-per-minute rate for the reading time estimate.
const READING_WPM: f64 = 200.0;

/// Raw counting signals for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Character count of the trimmed text.
    pub char_count: usize,
    /// Total word tokens.
    pub word_count: usize,
    /// Sentences found by the punctuation-boundary heuristic.
    pub sentence_count: usize,
    /// Tokens containing at least one letter.
    pub alpha_token_count: usize,
    /// Distinct alphabetic tokens.
    pub unique_alpha_count: usize,
    /// Average length of alphabetic tokens, in characters.
    pub avg_word_length: f64,
    /// Unique/total ratio over alphabetic tokens.
    pub lexical_diversity: f64,
    /// Tokens containing a digit (potential data points).
    pub digit_token_count: usize,
    /// Literal `?` occurrences.
    pub question_count: usize,
    /// URL-like substrings.
    pub url_count: usize,
    /// Estimated reading time in minutes at 200 wpm.
    pub reading_time_min: f64,
}

impl TextMetrics {
    fn zeroed(char_count: usize) -> Self {
        Self {
            char_count,
            word_count: 0,
            sentence_count: 0,
            alpha_token_count: 0,
            unique_alpha_count: 0,
            avg_word_length: 0.0,
            lexical_diversity: 0.0,
            digit_token_count: 0,
            question_count: 0,
            url_count: 0,
            reading_time_min: 0.0,
        }
    }
}

/// Scanner that extracts [`TextMetrics`] from raw text.
pub struct MetricsScanner {
    word_re: Regex,
    sentence_re: Regex,
    url_re: Regex,
}

impl Default for MetricsScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsScanner {
    /// Create a new scanner with the patterns compiled once.
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(WORD_PATTERN).expect("Invalid regex: word pattern"),
            sentence_re: Regex::new(SENTENCE_PATTERN).expect("Invalid regex: sentence pattern"),
            url_re: Regex::new(URL_PATTERN).expect("Invalid regex: url pattern"),
        }
    }

    /// Lowercased word tokens matching `[A-Za-z0-9']+`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_re
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    /// Split into sentences at terminal punctuation followed by whitespace.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentence_re
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Scan pre-trimmed text and return its metrics.
    pub fn scan(&self, text: &str) -> TextMetrics {
        let char_count = text.chars().count();
        let tokens = self.tokenize(text);

        if tokens.is_empty() {
            let mut metrics = TextMetrics::zeroed(char_count);
            // Punctuation-only text can still carry question marks.
            metrics.question_count = text.matches('?').count();
            metrics.sentence_count = self.sentences(text).len();
            metrics.url_count = self.url_re.find_iter(text).count();
            return metrics;
        }

        let word_count = tokens.len();
        let sentence_count = self.sentences(text).len();

        let alpha_tokens: Vec<&String> = tokens
            .iter()
            .filter(|t| t.chars().any(|c| c.is_ascii_lowercase()))
            .collect();
        let alpha_token_count = alpha_tokens.len();
        let unique_alpha: HashSet<&str> = alpha_tokens.iter().map(|t| t.as_str()).collect();
        let unique_alpha_count = unique_alpha.len();

        let (avg_word_length, lexical_diversity) = if alpha_token_count > 0 {
            let total_chars: usize = alpha_tokens.iter().map(|t| t.len()).sum();
            (
                total_chars as f64 / alpha_token_count as f64,
                unique_alpha_count as f64 / alpha_token_count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let digit_token_count = tokens
            .iter()
            .filter(|t| t.chars().any(|c| c.is_ascii_digit()))
            .count();
        let question_count = text.matches('?').count();
        let url_count = self.url_re.find_iter(text).count();

        let reading_time_min = word_count as f64 / READING_WPM;

        TextMetrics {
            char_count,
            word_count,
            sentence_count,
            alpha_token_count,
            unique_alpha_count,
            avg_word_length,
            lexical_diversity,
            digit_token_count,
            question_count,
            url_count,
            reading_time_min,
        }
    }
}
