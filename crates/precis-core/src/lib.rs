//! Precis Core: error types and summarizer configuration.

pub mod config;
pub mod error;

pub use config::SummarizerConfig;
pub use error::{Error, Result};
