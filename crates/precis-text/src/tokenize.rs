//! Tokenization and term normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use precis_core::SummarizerConfig;

use crate::stemmer::stem;
use crate::stopwords::is_stopword;

/// Letter/digit runs, allowing inner apostrophes ("don't", "o'neil").
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").unwrap());

/// Turns sentence text into normalized significant terms.
#[derive(Debug, Clone)]
pub struct TermAnalyzer {
    stemming: bool,
    min_token_len: usize,
    extra_stopwords: HashSet<String>,
}

impl Default for TermAnalyzer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl TermAnalyzer {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            stemming: config.stemming,
            min_token_len: config.min_token_len,
            extra_stopwords: config
                .extra_stopwords
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Significant terms of `text`, in order of appearance, duplicates kept.
    pub fn terms(&self, text: &str) -> Vec<String> {
        TOKEN_RE
            .find_iter(text)
            .filter_map(|m| self.normalize(m.as_str()))
            .collect()
    }

    fn normalize(&self, token: &str) -> Option<String> {
        let folded = token.to_lowercase().replace('’', "'");
        let word = folded.strip_suffix("'s").unwrap_or(&folded);

        if !word.chars().any(char::is_alphabetic) {
            return None;
        }
        if word.chars().count() < self.min_token_len {
            return None;
        }
        if is_stopword(word) || self.extra_stopwords.contains(word) {
            return None;
        }

        Some(if self.stemming {
            stem(word)
        } else {
            word.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding_and_punctuation() {
        let analyzer = TermAnalyzer::default();
        assert_eq!(analyzer.terms("Cats are GREAT!"), vec!["cat", "great"]);
    }

    #[test]
    fn test_possessive_and_curly_apostrophe() {
        let analyzer = TermAnalyzer::default();
        assert_eq!(analyzer.terms("Darwin's finch"), vec!["darwin", "finch"]);
        assert_eq!(analyzer.terms("Darwin’s finch"), vec!["darwin", "finch"]);
        // contraction stopword survives tokenization intact and is then dropped
        assert!(analyzer.terms("don't").is_empty());
    }

    #[test]
    fn test_numbers_and_short_tokens_dropped() {
        let analyzer = TermAnalyzer::default();
        assert_eq!(analyzer.terms("In 2019 x rose 5%"), vec!["rose"]);
    }

    #[test]
    fn test_stemming_toggle() {
        let config = SummarizerConfig {
            stemming: false,
            ..SummarizerConfig::default()
        };
        let analyzer = TermAnalyzer::from_config(&config);
        assert_eq!(analyzer.terms("running dogs"), vec!["running", "dogs"]);
        assert_eq!(TermAnalyzer::default().terms("running dogs"), vec!["run", "dog"]);
    }

    #[test]
    fn test_extra_stopwords() {
        let config = SummarizerConfig {
            extra_stopwords: vec!["Lorem".to_string()],
            ..SummarizerConfig::default()
        };
        let analyzer = TermAnalyzer::from_config(&config);
        assert_eq!(analyzer.terms("lorem ipsum"), vec!["ipsum"]);
    }
}
