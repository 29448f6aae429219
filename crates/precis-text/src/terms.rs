//! Document-wide term statistics.
//!
//! Ordered collections keep score accumulation independent of hash seeds,
//! so two runs over the same text produce bit-identical scores.

use std::collections::{BTreeMap, BTreeSet};

use crate::tokenize::TermAnalyzer;

/// Term frequencies across the document plus the distinct terms of each
/// sentence, indexed by global sentence order.
#[derive(Debug, Clone, Default)]
pub struct TermStatistics {
    frequencies: BTreeMap<String, usize>,
    sentence_terms: Vec<BTreeSet<String>>,
    total_occurrences: usize,
}

impl TermStatistics {
    /// Tokenize every sentence (in document order) and count terms.
    pub fn build<'a, I>(sentences: I, analyzer: &TermAnalyzer) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = Self::default();

        for sentence in sentences {
            let terms = analyzer.terms(sentence);
            stats.total_occurrences += terms.len();
            for term in &terms {
                *stats.frequencies.entry(term.clone()).or_insert(0) += 1;
            }
            stats.sentence_terms.push(terms.into_iter().collect());
        }

        stats
    }

    /// Occurrences of `term` across all sentences.
    pub fn frequency(&self, term: &str) -> usize {
        self.frequencies.get(term).copied().unwrap_or(0)
    }

    /// Total significant-term occurrences in the document.
    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }

    pub fn distinct_terms(&self) -> usize {
        self.frequencies.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_terms.len()
    }

    /// Distinct significant terms of the sentence at `sentence_order`.
    pub fn sentence_terms(&self, sentence_order: usize) -> Option<&BTreeSet<String>> {
        self.sentence_terms.get(sentence_order)
    }

    /// Iterate `(term, frequency)` in lexical order.
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, usize)> {
        self.frequencies.iter().map(|(t, &n)| (t.as_str(), n))
    }
}
