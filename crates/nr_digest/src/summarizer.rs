use std::sync::Arc;
use nr_core::{Notice, Outcome, Stage, SummarizationModel, SummaryBounds};
use nr_core::logging::preview;
use tracing::{debug, warn};

use crate::chunker::Chunker;

/// Chunked abstractive summarization over an injected model.
#[derive(Debug, Clone)]
pub struct Summarizer {
    model: Arc<dyn SummarizationModel>,
    chunker: Chunker,
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummarizationModel>, chunk_chars: usize) -> Self {
        Self {
            model,
            chunker: Chunker::new(chunk_chars),
        }
    }

    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Summarizes `text` chunk by chunk, in order, one model call at a time.
    ///
    /// A chunk whose model call fails, or yields a blank summary, contributes
    /// its own text instead and leaves a notice; the remaining chunks are
    /// still summarized.
    pub async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Outcome<String> {
        if text.is_empty() {
            return Outcome::clean(String::new());
        }

        let mut parts = Vec::new();
        let mut notices = Vec::new();
        for (index, chunk) in self.chunker.chunks(text).enumerate() {
            let chunk_text = chunk.text();
            debug!(chunk = index, chars = chunk.len(), "summarizing {}", preview(&chunk_text, 60));
            match self.model.summarize(&chunk_text, bounds).await {
                Ok(summary) if !summary.trim().is_empty() => parts.push(summary.trim().to_string()),
                Ok(_) => {
                    warn!(chunk = index, model = self.model.name(), "empty summary, keeping chunk text");
                    notices.push(Notice::new(Stage::Summarize, index, "model returned an empty summary"));
                    parts.push(chunk_text);
                }
                Err(e) => {
                    warn!(chunk = index, model = self.model.name(), "summarization failed, keeping chunk text: {}", e);
                    notices.push(Notice::new(Stage::Summarize, index, e.to_string()));
                    parts.push(chunk_text);
                }
            }
        }

        let summary = parts.join(" ").trim_end().to_string();
        Outcome::with_notices(summary, notices)
    }
}
