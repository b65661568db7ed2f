use std::fmt;
use nr_core::{Result, SummarizationModel, SummaryBounds};

use crate::Config;

/// Offline model: keeps the leading words of the text, up to `max_length`.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub async fn new(_config: Config) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait::async_trait]
impl SummarizationModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(bounds.max_length.min(20)).collect();
        Ok(words.join(" "))
    }
}
