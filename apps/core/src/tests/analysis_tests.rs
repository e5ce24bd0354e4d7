//! Analysis Tests
//!
//! Property-level tests for the heuristic pipeline: metrics extraction,
//! keyword ranking, insight emission rules, and summary selection.

use crate::analysis::{KeywordExtractor, MetricsScanner, TextAnalyzer};

#[cfg(test)]
mod metrics_properties {
    use super::*;

    #[test]
    fn test_counts_on_mixed_text() {
        let scanner = MetricsScanner::new();

        let metrics = scanner.scan(
            "Rust services scale well. Latency dropped 40% after the rewrite. Was it worth it?",
        );
        assert_eq!(metrics.sentence_count, 3);
        assert_eq!(metrics.question_count, 1);
        assert_eq!(metrics.digit_token_count, 1);
        assert_eq!(metrics.url_count, 0);
        assert!(metrics.word_count > 10);
    }

    #[test]
    fn test_whitespace_only_is_zeroed() {
        let analyzer = TextAnalyzer::new();

        // The analyzer trims before scanning.
        let report = analyzer.analyze("   \n\t  ");
        assert_eq!(report.metrics.char_count, 0);
        assert_eq!(report.metrics.word_count, 0);
    }

    #[test]
    fn test_multiple_urls_counted() {
        let scanner = MetricsScanner::new();

        let metrics =
            scanner.scan("Compare https://a.example.com and HTTP://b.example.com for details.");
        assert_eq!(metrics.url_count, 2);
    }
}

#[cfg(test)]
mod keyword_properties {
    use super::*;

    const LONG_TEXT: &str = "The inference service batches requests before the model runs. \
        Batching helps the service hide model latency, and the service reports latency \
        percentiles for every batching window the model sees.";

    #[test]
    fn test_at_most_five_keywords() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract(LONG_TEXT).len() <= 5);
    }

    #[test]
    fn test_no_stopwords_or_short_tokens_survive() {
        let extractor = KeywordExtractor::new();

        for hit in extractor.extract(LONG_TEXT) {
            assert!(hit.keyword.len() >= 4, "short keyword {:?}", hit.keyword);
            assert!(
                !["the", "and", "for", "that", "from", "with"].contains(&hit.keyword.as_str()),
                "stopword leaked: {:?}",
                hit.keyword
            );
        }
    }

    #[test]
    fn test_most_frequent_word_ranks_first() {
        let extractor = KeywordExtractor::new();

        let hits = extractor.extract(LONG_TEXT);
        assert_eq!(hits[0].keyword, "service");
        assert_eq!(hits[0].frequency, 3);
    }
}

#[cfg(test)]
mod summary_properties {
    use super::*;
    use crate::analysis::analyzer::{SUMMARY_DEEP, SUMMARY_SHORT, SUMMARY_SNAPSHOT};

    fn words(n: usize) -> String {
        vec!["token"; n].join(" ")
    }

    #[test]
    fn test_summary_is_always_one_of_three() {
        let analyzer = TextAnalyzer::new();

        let samples = [
            String::new(),
            "Hi".to_string(),
            words(8),
            words(9),
            words(60),
            words(61),
        ];
        for text in &samples {
            let report = analyzer.analyze(text);
            assert!(
                [SUMMARY_SHORT, SUMMARY_SNAPSHOT, SUMMARY_DEEP].contains(&report.summary.as_str()),
                "unexpected summary {:?} for {:?} words",
                report.summary,
                report.metrics.word_count
            );
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let analyzer = TextAnalyzer::new();

        assert_eq!(analyzer.analyze(&words(8)).summary, SUMMARY_SHORT);
        assert_eq!(analyzer.analyze(&words(9)).summary, SUMMARY_SNAPSHOT);
        assert_eq!(analyzer.analyze(&words(60)).summary, SUMMARY_SNAPSHOT);
        assert_eq!(analyzer.analyze(&words(61)).summary, SUMMARY_DEEP);
    }

    #[test]
    fn test_two_word_greeting_is_short_text() {
        let analyzer = TextAnalyzer::new();

        let report = analyzer.analyze("Hi there");
        assert_eq!(report.metrics.word_count, 2);
        assert_eq!(report.summary, "Too little context for deep analysis");
    }
}

#[cfg(test)]
mod insight_emission_rules {
    use super::*;

    /// Derived-metric lines appear exactly when their preconditions hold.
    #[test]
    fn test_zero_words_means_only_mandatory_count_lines() {
        let analyzer = TextAnalyzer::new();

        for text in ["", "???", "!!! ...", "¿¡"] {
            let report = analyzer.analyze(text);
            assert_eq!(report.metrics.word_count, 0, "for {:?}", text);

            let derived: Vec<&String> = report
                .insights
                .iter()
                .filter(|i| {
                    i.starts_with("Sentence count:")
                        || i.starts_with("Avg words/sentence:")
                        || i.starts_with("Avg word length:")
                        || i.starts_with("Lexical diversity:")
                        || i.starts_with("Top keywords:")
                        || i.starts_with("Estimated reading time:")
                })
                .collect();
            assert!(derived.is_empty(), "derived lines for {:?}: {:?}", text, derived);
        }
    }

    #[test]
    fn test_mandatory_lines_come_first() {
        let analyzer = TextAnalyzer::new();

        let report = analyzer.analyze("Any old sentence works here.");
        assert!(report.insights[0].starts_with("Word count:"));
        assert!(report.insights[1].starts_with("Character count:"));
    }

    #[test]
    fn test_closing_line_matches_summary_branch() {
        let analyzer = TextAnalyzer::new();

        let short = analyzer.analyze("Hi there");
        assert!(short.insights.last().unwrap().starts_with("This is short text;"));

        let medium = analyzer.analyze(
            "Nine or more words are needed to leave the short branch behind entirely.",
        );
        assert!(medium
            .insights
            .last()
            .unwrap()
            .starts_with("This is moderate-length text;"));

        let long = analyzer.analyze(&"many words here ".repeat(30));
        assert!(long.insights.last().unwrap().starts_with("This is longer text;"));
    }
}
