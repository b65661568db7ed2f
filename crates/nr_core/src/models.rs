use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

/// Target length bounds handed to a summarization model, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub max_length: usize,
    pub min_length: usize,
}

impl SummaryBounds {
    pub const fn new(max_length: usize, min_length: usize) -> Self {
        Self { max_length, min_length }
    }
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self::new(130, 30)
    }
}

#[async_trait]
pub trait SummarizationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Abstractive summary of a single chunk of text
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String>;
}

#[async_trait]
pub trait TranslationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Translate one chunk into `target_language`.
    /// Retryable failures must be reported as `Error::Transient`.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}
