//! Result records returned by summary queries.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A ranked sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Sentence text, verbatim apart from trimmed outer whitespace.
    pub text: String,
    /// 1 = most important sentence in the document.
    pub rank: usize,
    /// Position of the sentence in the whole document (0-based).
    pub sentence_order: usize,
    /// Position of the enclosing paragraph (0-based).
    pub paragraph_order: usize,
    pub score: f64,
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sentence Order: {}, Paragraph Order: {} Rank: {}\n  '{}'",
            self.sentence_order, self.paragraph_order, self.rank, self.text
        )
    }
}

/// A ranked paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: String,
    /// 1 = most important paragraph in the document.
    pub rank: usize,
    pub paragraph_order: usize,
    /// Mean of the paragraph's sentence scores.
    pub score: f64,
    #[serde(skip)]
    pub(crate) sentence_orders: Range<usize>,
}

impl Paragraph {
    /// Global orders of the sentences in this paragraph.
    pub fn sentence_orders(&self) -> Range<usize> {
        self.sentence_orders.clone()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paragraph Order: {} Rank: {}\n  '{}'",
            self.paragraph_order, self.rank, self.text
        )
    }
}
