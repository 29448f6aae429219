//! Term-frequency sentence scoring.
//!
//! A sentence scores the sum of its distinct terms' document frequencies,
//! normalized by the total number of significant-term occurrences. Sentences
//! built from vocabulary that recurs across the document score highest.
//! There is no position or length weighting.

use precis_core::SummarizerConfig;
use precis_text::{SegmentedParagraph, TermStatistics};

#[derive(Debug, Clone)]
pub struct Scorer {
    min_term_frequency: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl Scorer {
    pub fn new(min_term_frequency: usize) -> Self {
        Self {
            min_term_frequency: min_term_frequency.max(1),
        }
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(config.min_term_frequency)
    }

    /// One score per sentence, indexed by sentence order.
    pub fn score_sentences(&self, stats: &TermStatistics) -> Vec<f64> {
        let total = stats.total_occurrences();

        (0..stats.sentence_count())
            .map(|order| {
                if total == 0 {
                    return 0.0;
                }
                // Integer sum first so the result has a single rounding step.
                let weight: usize = stats
                    .sentence_terms(order)
                    .into_iter()
                    .flatten()
                    .map(|term| stats.frequency(term))
                    .filter(|&tf| tf >= self.min_term_frequency)
                    .sum();
                weight as f64 / total as f64
            })
            .collect()
    }

    /// Mean sentence score per paragraph; zero for a paragraph without sentences.
    pub fn score_paragraphs(
        &self,
        paragraphs: &[SegmentedParagraph<'_>],
        sentence_scores: &[f64],
    ) -> Vec<f64> {
        paragraphs
            .iter()
            .map(|paragraph| {
                if paragraph.sentences.is_empty() {
                    return 0.0;
                }
                let sum: f64 = paragraph
                    .sentences
                    .iter()
                    .map(|s| sentence_scores.get(s.order).copied().unwrap_or(0.0))
                    .sum();
                sum / paragraph.sentences.len() as f64
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_text::{Segmenter, TermAnalyzer};

    fn stats_for(sentences: &[&str]) -> TermStatistics {
        TermStatistics::build(sentences.iter().copied(), &TermAnalyzer::default())
    }

    #[test]
    fn test_recurring_terms_score_higher() {
        let stats = stats_for(&["Cats are great.", "Dogs are great too.", "Birds fly."]);
        let scores = Scorer::default().score_sentences(&stats);

        // cat(1) + great(2) over 6 occurrences
        assert!((scores[0] - 0.5).abs() < 1e-12);
        assert_eq!(scores[0], scores[1]);
        assert!(scores[2] < scores[0]);
    }

    #[test]
    fn test_min_term_frequency_filters() {
        let stats = stats_for(&["Cats are great.", "Dogs are great too.", "Birds fly."]);
        let scores = Scorer::new(2).score_sentences(&stats);

        assert!((scores[0] - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_stopword_only_document() {
        let stats = stats_for(&["It is what it is.", "And so on."]);
        assert_eq!(Scorer::default().score_sentences(&stats), vec![0.0, 0.0]);
    }

    #[test]
    fn test_paragraph_mean() {
        let paragraphs = Segmenter::new().segment("One two. Three.\n\nFour.");
        let scores = Scorer::default().score_paragraphs(&paragraphs, &[0.2, 0.4, 0.9]);
        assert!((scores[0] - 0.3).abs() < 1e-12);
        assert!((scores[1] - 0.9).abs() < 1e-12);
    }
}
