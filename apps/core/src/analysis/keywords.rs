//! Keyword extraction by frequency ranking.
//!
//! Filters word tokens against a fixed English stopword set, drops short and
//! non-alphabetic tokens, and ranks the survivors by raw frequency. Ties keep
//! their first-encountered order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::metrics::WORD_PATTERN;

/// Common English function words excluded from keyword ranking.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "he",
    "her", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my", "not", "of", "on", "or",
    "our", "she", "so", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "to", "was", "we", "were", "what", "when", "where", "which", "who", "will", "with", "you",
    "your",
];

/// Keyword candidates shorter than this many characters are dropped.
const MIN_KEYWORD_LEN: usize = 4;

/// Number of top-ranked keywords reported.
const MAX_KEYWORDS: usize = 5;

/// A ranked keyword with its raw frequency in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// The keyword, case-folded.
    pub keyword: String,
    /// Raw occurrence count in the text.
    pub frequency: usize,
}

/// Keyword extractor over a fixed stopword set.
pub struct KeywordExtractor {
    word_re: Regex,
    stopwords: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new extractor with the stopword set built once.
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(WORD_PATTERN).expect("Invalid regex: word pattern"),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Extract the top keywords from raw text.
    ///
    /// Candidates are lowercased word tokens that contain a letter, are not
    /// stopwords, and are at least [`MIN_KEYWORD_LEN`] characters long. The
    /// top [`MAX_KEYWORDS`] by frequency are returned; equal frequencies keep
    /// first-encountered order.
    pub fn extract(&self, text: &str) -> Vec<KeywordHit> {
        let mut first_seen: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for m in self.word_re.find_iter(text) {
            let token = m.as_str().to_lowercase();
            if token.len() < MIN_KEYWORD_LEN
                || !token.chars().any(|c| c.is_ascii_lowercase())
                || self.is_stopword(&token)
            {
                continue;
            }
            if !counts.contains_key(&token) {
                first_seen.push(token.clone());
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<KeywordHit> = first_seen
            .into_iter()
            .map(|keyword| {
                let frequency = counts[&keyword];
                KeywordHit { keyword, frequency }
            })
            .collect();

        // Stable sort: ties stay in first-encountered order.
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(MAX_KEYWORDS);
        ranked
    }

    /// Extract keywords and return just the strings.
    #[allow(dead_code)]
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|k| k.keyword).collect()
    }
}
