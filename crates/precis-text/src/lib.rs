//! Precis Text: paragraph/sentence segmentation, tokenization, and
//! document-wide term statistics.

pub mod segment;
pub mod stemmer;
pub mod stopwords;
pub mod terms;
pub mod tokenize;

pub use segment::{SegmentedParagraph, SegmentedSentence, Segmenter};
pub use terms::TermStatistics;
pub use tokenize::TermAnalyzer;
