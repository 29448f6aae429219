//! Immutable, queryable summary of one document.

use crate::types::{Paragraph, Sentence};

/// Pass as a limit to request every entity in document order. Any value
/// `<= 0` behaves the same.
pub const ALL: i64 = -1;

/// Ranked sentences and paragraphs of a document.
///
/// Records are stored in document order, alongside the rank order used
/// to answer partial queries.
#[derive(Debug, Clone, Default)]
pub struct SummaryIndex {
    paragraphs: Vec<Paragraph>,
    sentences: Vec<Sentence>,
    /// Paragraph orders, most important first.
    paragraphs_by_rank: Vec<usize>,
    /// Sentence orders, most important first.
    sentences_by_rank: Vec<usize>,
}

impl SummaryIndex {
    pub(crate) fn new(
        paragraphs: Vec<Paragraph>,
        sentences: Vec<Sentence>,
        paragraphs_by_rank: Vec<usize>,
        sentences_by_rank: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(paragraphs.len(), paragraphs_by_rank.len());
        debug_assert_eq!(sentences.len(), sentences_by_rank.len());
        Self {
            paragraphs,
            sentences,
            paragraphs_by_rank,
            sentences_by_rank,
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Sentence summary.
    ///
    /// - `max_sentences <= 0` or `>= sentence_count()`: every sentence, in
    ///   document order.
    /// - otherwise: the `max_sentences` top-ranked sentences, rank 1 first.
    pub fn sentence_summary(&self, max_sentences: i64) -> Vec<Sentence> {
        select(&self.sentences, &self.sentences_by_rank, max_sentences)
    }

    /// Paragraph summary, with the same limit rules as [`Self::sentence_summary`].
    pub fn paragraph_summary(&self, max_paragraphs: i64) -> Vec<Paragraph> {
        select(&self.paragraphs, &self.paragraphs_by_rank, max_paragraphs)
    }

    /// Selected sentences re-sorted into reading order and joined by spaces.
    pub fn sentence_summary_text(&self, max_sentences: i64) -> String {
        let mut selected = self.sentence_summary(max_sentences);
        selected.sort_by_key(|s| s.sentence_order);
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Selected paragraphs re-sorted into reading order and joined by blank lines.
    pub fn paragraph_summary_text(&self, max_paragraphs: i64) -> String {
        let mut selected = self.paragraph_summary(max_paragraphs);
        selected.sort_by_key(|p| p.paragraph_order);
        selected
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All sentences in document order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn sentence(&self, sentence_order: usize) -> Option<&Sentence> {
        self.sentences.get(sentence_order)
    }

    pub fn paragraph(&self, paragraph_order: usize) -> Option<&Paragraph> {
        self.paragraphs.get(paragraph_order)
    }

    /// Sentences of one paragraph in document order; empty if out of range.
    pub fn paragraph_sentences(&self, paragraph_order: usize) -> &[Sentence] {
        self.paragraphs
            .get(paragraph_order)
            .and_then(|p| self.sentences.get(p.sentence_orders()))
            .unwrap_or(&[])
    }
}

fn select<T: Clone>(in_document_order: &[T], by_rank: &[usize], limit: i64) -> Vec<T> {
    match usize::try_from(limit) {
        Ok(k) if k > 0 && k < in_document_order.len() => by_rank[..k]
            .iter()
            .map(|&idx| in_document_order[idx].clone())
            .collect(),
        _ => in_document_order.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(order: usize, rank: usize) -> Sentence {
        Sentence {
            text: format!("s{order}"),
            rank,
            sentence_order: order,
            paragraph_order: 0,
            score: 0.0,
        }
    }

    fn sample() -> SummaryIndex {
        let sentences = vec![sentence(0, 2), sentence(1, 3), sentence(2, 1)];
        let paragraph = Paragraph {
            text: "s0 s1 s2".to_string(),
            rank: 1,
            paragraph_order: 0,
            score: 0.0,
            sentence_orders: 0..3,
        };
        SummaryIndex::new(vec![paragraph], sentences, vec![0], vec![2, 0, 1])
    }

    #[test]
    fn test_select_limits() {
        let index = sample();
        let ranks = |v: Vec<Sentence>| v.iter().map(|s| s.rank).collect::<Vec<_>>();

        assert_eq!(ranks(index.sentence_summary(2)), vec![1, 2]);
        assert_eq!(ranks(index.sentence_summary(1)), vec![1]);
        // sentinel and clamp both give document order
        assert_eq!(ranks(index.sentence_summary(ALL)), vec![2, 3, 1]);
        assert_eq!(ranks(index.sentence_summary(0)), vec![2, 3, 1]);
        assert_eq!(ranks(index.sentence_summary(3)), vec![2, 3, 1]);
        assert_eq!(ranks(index.sentence_summary(i64::MAX)), vec![2, 3, 1]);
        assert_eq!(ranks(index.sentence_summary(i64::MIN)), vec![2, 3, 1]);
    }

    #[test]
    fn test_summary_text_in_reading_order() {
        let index = sample();
        assert_eq!(index.sentence_summary_text(2), "s0 s2");
        assert_eq!(index.sentence_summary_text(ALL), "s0 s1 s2");
        assert_eq!(index.paragraph_summary_text(ALL), "s0 s1 s2");
    }

    #[test]
    fn test_paragraph_sentences() {
        let index = sample();
        assert_eq!(index.paragraph_sentences(0).len(), 3);
        assert!(index.paragraph_sentences(5).is_empty());
        assert_eq!(index.sentence(2).map(|s| s.rank), Some(1));
        assert!(index.paragraph(1).is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = SummaryIndex::default();
        assert!(index.sentence_summary(3).is_empty());
        assert!(index.paragraph_summary(ALL).is_empty());
        assert_eq!(index.sentence_summary_text(ALL), "");
    }
}
