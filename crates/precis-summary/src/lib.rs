//! Precis Summary: extractive summarization over segmented text.
//!
//! Pipeline: segment → term statistics → score → rank → [`SummaryIndex`].
//! Everything is computed once in [`SummaryEngine::new`]; the index is
//! read-only afterwards and safe to share across threads.

pub mod engine;
pub mod index;
pub mod ranker;
pub mod scorer;
pub mod types;

pub use engine::SummaryEngine;
pub use index::{SummaryIndex, ALL};
pub use scorer::Scorer;
pub use types::{Paragraph, Sentence};
