//! Summary engine: runs the full pipeline once per document.

use std::ops::Deref;

use precis_core::{Result, SummarizerConfig};
use precis_text::{Segmenter, TermAnalyzer, TermStatistics};
use tracing::debug;

use crate::index::SummaryIndex;
use crate::ranker::{assign_ranks, rank_order, RankEntry};
use crate::scorer::Scorer;
use crate::types::{Paragraph, Sentence};

/// Owns the [`SummaryIndex`] built from one document.
///
/// A new document needs a new engine; nothing is updated incrementally.
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    index: SummaryIndex,
}

impl SummaryEngine {
    /// Summarize `text` with the default configuration.
    pub fn new(text: &str) -> Self {
        Self::build(text, &SummarizerConfig::default())
    }

    /// Summarize `text` with a caller-supplied configuration.
    pub fn with_config(text: &str, config: &SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(text, config))
    }

    pub fn index(&self) -> &SummaryIndex {
        &self.index
    }

    pub fn into_index(self) -> SummaryIndex {
        self.index
    }

    fn build(text: &str, config: &SummarizerConfig) -> Self {
        let segmented = Segmenter::from_config(config).segment(text);
        let segmented_sentences: Vec<_> = segmented.iter().flat_map(|p| &p.sentences).collect();

        let stats = TermStatistics::build(
            segmented_sentences.iter().map(|s| s.text),
            &TermAnalyzer::from_config(config),
        );

        let scorer = Scorer::from_config(config);
        let sentence_scores = scorer.score_sentences(&stats);
        let paragraph_scores = scorer.score_paragraphs(&segmented, &sentence_scores);

        let sentence_entries: Vec<RankEntry> = segmented_sentences
            .iter()
            .map(|s| RankEntry {
                score: sentence_scores[s.order],
                paragraph_order: s.paragraph_order,
                sentence_order: s.order,
            })
            .collect();
        let paragraph_entries: Vec<RankEntry> = segmented
            .iter()
            .map(|p| RankEntry {
                score: paragraph_scores[p.order],
                paragraph_order: p.order,
                sentence_order: p.order,
            })
            .collect();

        let sentences_by_rank = rank_order(&sentence_entries);
        let paragraphs_by_rank = rank_order(&paragraph_entries);
        let sentence_ranks = assign_ranks(&sentences_by_rank);
        let paragraph_ranks = assign_ranks(&paragraphs_by_rank);

        let sentences: Vec<Sentence> = segmented_sentences
            .iter()
            .map(|s| Sentence {
                text: s.text.to_string(),
                rank: sentence_ranks[s.order],
                sentence_order: s.order,
                paragraph_order: s.paragraph_order,
                score: sentence_scores[s.order],
            })
            .collect();

        let paragraphs: Vec<Paragraph> = segmented
            .iter()
            .map(|p| {
                let first = p.sentences.first().map_or(0, |s| s.order);
                Paragraph {
                    text: p.text.to_string(),
                    rank: paragraph_ranks[p.order],
                    paragraph_order: p.order,
                    score: paragraph_scores[p.order],
                    sentence_orders: first..first + p.sentences.len(),
                }
            })
            .collect();

        debug!(
            paragraphs = paragraphs.len(),
            sentences = sentences.len(),
            terms = stats.distinct_terms(),
            "Built summary index"
        );

        Self {
            index: SummaryIndex::new(paragraphs, sentences, paragraphs_by_rank, sentences_by_rank),
        }
    }
}

impl Deref for SummaryEngine {
    type Target = SummaryIndex;

    fn deref(&self) -> &SummaryIndex {
        &self.index
    }
}
