//! Score → rank conversion with document-order tie-breaking.

use std::cmp::Ordering;

/// Sort key for one rankable entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankEntry {
    pub score: f64,
    pub paragraph_order: usize,
    /// Equal to `paragraph_order` when ranking paragraphs.
    pub sentence_order: usize,
}

impl RankEntry {
    fn cmp_importance(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.paragraph_order.cmp(&other.paragraph_order))
            .then(self.sentence_order.cmp(&other.sentence_order))
    }
}

/// Positions of `entries` from most to least important.
///
/// Higher score first; ties go to the entity earlier in the document. The
/// comparison is total, so the result does not depend on sort stability.
pub fn rank_order(entries: &[RankEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_unstable_by(|&a, &b| entries[a].cmp_importance(&entries[b]));
    order
}

/// 1-based rank of each entry, indexed like `entries`.
pub fn assign_ranks(rank_order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; rank_order.len()];
    for (position, &idx) in rank_order.iter().enumerate() {
        ranks[idx] = position + 1;
    }
    ranks
}
