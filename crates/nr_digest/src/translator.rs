use std::sync::Arc;
use std::time::Duration;
use nr_core::{Notice, Outcome, Stage, TranslationModel};
use tracing::{debug, info, warn};

/// Positional chunked translation with bounded retry.
#[derive(Debug, Clone)]
pub struct Translator {
    model: Arc<dyn TranslationModel>,
    source_language: String,
    backoff: Duration,
}

impl Translator {
    pub fn new(model: Arc<dyn TranslationModel>, source_language: impl Into<String>) -> Self {
        Self {
            model,
            source_language: source_language.into(),
            backoff: Duration::from_secs(1),
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn is_identity(&self, target_language: &str) -> bool {
        target_language == self.source_language
    }

    /// Translates `text` in slices of `chunk_chars` characters.
    ///
    /// Each slice gets up to `max_attempts` tries, sleeping a fixed backoff
    /// after a transient failure. A slice that cannot be translated is kept
    /// verbatim, as is one the model answers with blank output. Never fails.
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        chunk_chars: usize,
        max_attempts: u32,
    ) -> Outcome<String> {
        if self.is_identity(target_language) {
            return Outcome::clean(text.to_string());
        }

        let attempts = max_attempts.max(1);
        let mut translated = String::with_capacity(text.len());
        let mut notices = Vec::new();

        for (index, chunk) in char_slices(text, chunk_chars).enumerate() {
            let mut attempt = 1;
            loop {
                match self.model.translate(chunk, target_language).await {
                    Ok(output) if output.trim().is_empty() && !chunk.trim().is_empty() => {
                        warn!(chunk = index, target = target_language, "empty translation, keeping untranslated chunk");
                        notices.push(Notice::new(Stage::Translate, index, "translator returned empty output"));
                        translated.push_str(chunk);
                        break;
                    }
                    Ok(output) => {
                        debug!(chunk = index, attempt, "translated {} chars", chunk.chars().count());
                        translated.push_str(&output);
                        break;
                    }
                    Err(e) if e.is_transient() && attempt < attempts => {
                        info!(chunk = index, attempt, "translation request failed, retrying in {:?}: {}", self.backoff, e);
                        tokio::time::sleep(self.backoff).await;
                        attempt += 1;
                    }
                    Err(e) => {
                        warn!(chunk = index, attempt, target = target_language, "keeping untranslated chunk: {}", e);
                        notices.push(Notice::new(Stage::Translate, index, e.to_string()));
                        translated.push_str(chunk);
                        break;
                    }
                }
            }
        }

        Outcome::with_notices(translated, notices)
    }
}

/// Splits `text` into consecutive slices of at most `size` characters.
pub fn char_slices(text: &str, size: usize) -> impl Iterator<Item = &str> {
    let size = size.max(1);
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(size)
            .map_or(rest.len(), |(offset, _)| offset);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}
