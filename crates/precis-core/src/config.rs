//! Summarizer configuration.
//!
//! Defaults reproduce the stock behaviour: stemming on, no frequency
//! filtering beyond stopwords, single-character tokens dropped.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Tunables for segmentation and term statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Apply the suffix-stripping stemmer to terms.
    pub stemming: bool,
    /// A term contributes to sentence scores only if it occurs at least this
    /// many times in the document.
    pub min_term_frequency: usize,
    /// Tokens shorter than this (in chars) are discarded.
    pub min_token_len: usize,
    /// Words treated as stopwords in addition to the built-in English list.
    pub extra_stopwords: Vec<String>,
    /// Abbreviations (without trailing period) that never end a sentence.
    pub extra_abbreviations: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            stemming: true,
            min_term_frequency: 1,
            min_token_len: 2,
            extra_stopwords: Vec::new(),
            extra_abbreviations: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Reads `PRECIS_STEMMING` and `PRECIS_MIN_TERM_FREQUENCY`; values that
    /// fail to parse are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let stemming = std::env::var("PRECIS_STEMMING")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.stemming);

        let min_term_frequency = std::env::var("PRECIS_MIN_TERM_FREQUENCY")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.min_term_frequency);

        Self {
            stemming,
            min_term_frequency,
            ..defaults
        }
    }

    /// Parse configuration from a JSON string. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading summarizer config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Reject settings that would make every term or token disappear.
    pub fn validate(&self) -> Result<()> {
        if self.min_term_frequency == 0 {
            return Err(Error::Config(
                "min_term_frequency must be at least 1".to_string(),
            ));
        }
        if self.min_token_len == 0 {
            return Err(Error::Config("min_token_len must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
