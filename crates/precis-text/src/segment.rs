//! Paragraph and sentence segmentation.
//!
//! Paragraphs end at blank lines or at explicit markers (U+2029, form feed).
//! Sentences end at a run of `.`, `!`, `?` (plus trailing closing quotes or
//! brackets) followed by whitespace or end of text. A lone period after a
//! known abbreviation or an initial does not end a sentence.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ops::Range;
use tracing::trace;

use precis_core::SummarizerConfig;

const PARAGRAPH_MARKERS: &[char] = &['\u{2029}', '\u{000C}'];

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // titles
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon", "capt", "lt", "sgt",
        "gov", "sen", "pres",
        // latin and reference shorthand
        "vs", "etc", "e.g", "i.e", "cf", "approx", "fig", "figs", "eq", "vol", "pp",
        // business
        "inc", "ltd", "corp", "dept", "univ", "assn", "bros",
        // months that are not also words
        "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        // addresses
        "ave", "blvd", "rd", "mt",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that are also ordinary words; guarded only before a number
/// ("No. 5", "Nos. 3-4").
const NUMBERING_ABBREVIATIONS: &[&str] = &["no", "nos"];

/// A paragraph borrowed from the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedParagraph<'a> {
    pub order: usize,
    /// Verbatim paragraph text with outer whitespace trimmed.
    pub text: &'a str,
    pub sentences: Vec<SegmentedSentence<'a>>,
}

/// A sentence borrowed from the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedSentence<'a> {
    /// Document-global sentence index.
    pub order: usize,
    pub paragraph_order: usize,
    pub text: &'a str,
}

/// Splits raw text into paragraphs of sentences.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    extra_abbreviations: HashSet<String>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            extra_abbreviations: config
                .extra_abbreviations
                .iter()
                .map(|a| a.trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Segment `text`. Empty or whitespace-only input yields no paragraphs.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<SegmentedParagraph<'a>> {
        let mut paragraphs = Vec::new();
        let mut next_sentence = 0;

        for (order, span) in paragraph_spans(text).into_iter().enumerate() {
            let paragraph_text = &text[span];
            let sentences: Vec<SegmentedSentence<'a>> = self
                .split_sentences(paragraph_text)
                .into_iter()
                .map(|sentence| {
                    let segmented = SegmentedSentence {
                        order: next_sentence,
                        paragraph_order: order,
                        text: sentence,
                    };
                    next_sentence += 1;
                    segmented
                })
                .collect();

            paragraphs.push(SegmentedParagraph {
                order,
                text: paragraph_text,
                sentences,
            });
        }

        paragraphs
    }

    /// Split one paragraph into trimmed sentence slices.
    fn split_sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !is_terminal(ch) {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < chars.len() && is_terminal(chars[j].1) {
                j += 1;
            }
            let lone_period = ch == '.' && j - i == 1;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map_or(paragraph.len(), |&(p, _)| p);
            let at_break = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());

            if at_break {
                let following = &paragraph[end..];
                if lone_period && self.is_abbreviation(&paragraph[start..pos], following) {
                    trace!(
                        "Suppressed sentence break after abbreviation: {:?}",
                        &paragraph[start..end]
                    );
                } else {
                    push_trimmed(&mut sentences, &paragraph[start..end]);
                    start = end;
                }
            }
            i = j;
        }

        push_trimmed(&mut sentences, &paragraph[start..]);
        sentences
    }

    /// Whether the word just before a period is an abbreviation or initial.
    fn is_abbreviation(&self, preceding: &str, following: &str) -> bool {
        let word = preceding
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        let folded = word.to_lowercase();
        if ABBREVIATIONS.contains(folded.as_str()) || self.extra_abbreviations.contains(&folded) {
            return true;
        }
        if NUMBERING_ABBREVIATIONS.contains(&folded.as_str()) {
            return following
                .trim_start()
                .starts_with(|c: char| c.is_ascii_digit());
        }

        // Initials: "J", "U.S", "J.R.R". A bare "I" is the pronoun.
        word != "I"
            && word.split('.').all(|part| {
                let mut chars = part.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
            })
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Byte ranges of trimmed, non-empty paragraphs in `text`.
fn paragraph_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut block_start = 0;

    for (idx, ch) in text.char_indices() {
        if PARAGRAPH_MARKERS.contains(&ch) {
            blank_line_spans(text, block_start..idx, &mut spans);
            block_start = idx + ch.len_utf8();
        }
    }
    blank_line_spans(text, block_start..text.len(), &mut spans);

    spans
}

/// Split a marker-free block on whitespace-only lines.
fn blank_line_spans(text: &str, block: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let mut offset = block.start;
    let mut current: Option<Range<usize>> = None;

    for line in split_lines(&text[block]) {
        let line_start = offset;
        offset += line.len();

        if line.trim().is_empty() {
            if let Some(span) = current.take() {
                spans.push(span);
            }
            continue;
        }

        let content_end = line_start + line.trim_end().len();
        match current.as_mut() {
            Some(span) => span.end = content_end,
            None => {
                let content_start = line_start + (line.len() - line.trim_start().len());
                current = Some(content_start..content_end);
            }
        }
    }

    if let Some(span) = current {
        spans.push(span);
    }
}

/// Lines of `block` with their terminators. `\n`, `\r\n` and a bare `\r`
/// each end a line.
fn split_lines(block: &str) -> Vec<&str> {
    let bytes = block.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let ends_line = b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
        if ends_line {
            lines.push(&block[start..=i]);
            start = i + 1;
        }
    }
    if start < block.len() {
        lines.push(&block[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_texts<'a>(paragraphs: &[SegmentedParagraph<'a>]) -> Vec<&'a str> {
        paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter().map(|s| s.text))
            .collect()
    }

    #[test]
    fn test_empty_and_whitespace() {
        let segmenter = Segmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("  \n\t\n  ").is_empty());
    }

    #[test]
    fn test_basic_sentences() {
        let paragraphs = Segmenter::new().segment("Cats are great. Dogs are great too. Birds fly.");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(
            sentence_texts(&paragraphs),
            vec!["Cats are great.", "Dogs are great too.", "Birds fly."]
        );
        let orders: Vec<usize> = paragraphs[0].sentences.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_blank_lines_split_paragraphs() {
        let text = "First para. Still first.\n\n\n  Second para\nspans lines.\r\n\r\nThird.";
        let paragraphs = Segmenter::new().segment(text);

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1].text, "Second para\nspans lines.");
        assert_eq!(paragraphs[2].text, "Third.");
        assert_eq!(paragraphs[2].sentences[0].order, 3);
        assert_eq!(paragraphs[2].sentences[0].paragraph_order, 2);
    }

    #[test]
    fn test_bare_carriage_return_lines() {
        let paragraphs = Segmenter::new().segment("One.\r\rTwo.\rstill two.\r\n\r\nThree.");
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1].text, "Two.\rstill two.");
        assert_eq!(paragraphs[2].text, "Three.");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a\r\n", "b\r", "c\n", "d"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_paragraph_markers() {
        let paragraphs = Segmenter::new().segment("One.\u{2029}Two.\u{000C}Three.");
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1].text, "Two.");
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let paragraphs = Segmenter::new().segment("  just a fragment without an end  ");
        assert_eq!(sentence_texts(&paragraphs), vec!["just a fragment without an end"]);
    }

    #[test]
    fn test_consecutive_punctuation_and_closers() {
        let paragraphs = Segmenter::new().segment("Really?! Yes... \"Go now.\" (Fine.) Done");
        assert_eq!(
            sentence_texts(&paragraphs),
            vec!["Really?!", "Yes...", "\"Go now.\"", "(Fine.)", "Done"]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let text = "Dr. Smith met J. R. Tolkien in the U.S. last year. They talked, e.g. about maps.";
        let paragraphs = Segmenter::new().segment(text);
        // "U.S." is guarded too, so the first break is after "year."
        assert_eq!(
            sentence_texts(&paragraphs),
            vec![
                "Dr. Smith met J. R. Tolkien in the U.S. last year.",
                "They talked, e.g. about maps."
            ]
        );
    }

    #[test]
    fn test_common_words_end_sentences() {
        let paragraphs =
            Segmenter::new().segment("She said no. He left. It was a new ed. Then came Mar. He sang.");
        assert_eq!(
            sentence_texts(&paragraphs),
            vec![
                "She said no.",
                "He left.",
                "It was a new ed.",
                "Then came Mar.",
                "He sang."
            ]
        );
    }

    #[test]
    fn test_numbering_abbreviation_before_digit() {
        let paragraphs = Segmenter::new().segment("See No. 5 in the list. Then stop.");
        assert_eq!(
            sentence_texts(&paragraphs),
            vec!["See No. 5 in the list.", "Then stop."]
        );
    }

    #[test]
    fn test_pronoun_i_still_splits() {
        let paragraphs = Segmenter::new().segment("So did I. Then we left.");
        assert_eq!(sentence_texts(&paragraphs), vec!["So did I.", "Then we left."]);
    }

    #[test]
    fn test_decimal_point_is_not_boundary() {
        let paragraphs = Segmenter::new().segment("Pi is 3.14 roughly. Next.");
        assert_eq!(sentence_texts(&paragraphs), vec!["Pi is 3.14 roughly.", "Next."]);
    }

    #[test]
    fn test_extra_abbreviations() {
        let config = SummarizerConfig {
            extra_abbreviations: vec!["Approx.".to_string(), "Pkg".to_string()],
            ..SummarizerConfig::default()
        };
        let paragraphs = Segmenter::from_config(&config).segment("See pkg. three. Ok.");
        assert_eq!(sentence_texts(&paragraphs), vec!["See pkg. three.", "Ok."]);
    }
}
