use nr_core::{SummaryBounds, SOURCE_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for one roundup run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Character budget for a summarization chunk.
    pub summary_chunk_chars: usize,
    pub article_summary: SummaryBounds,
    pub combined_summary: SummaryBounds,
    /// Character size of a translation chunk.
    pub translation_chunk_chars: usize,
    /// Attempts per translation chunk before falling back to the source text.
    pub translation_attempts: u32,
    #[serde(with = "millis")]
    pub translation_backoff: Duration,
    pub source_language: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_chunk_chars: 1000,
            article_summary: SummaryBounds::new(130, 30),
            combined_summary: SummaryBounds::new(130, 30),
            translation_chunk_chars: 4900,
            translation_attempts: 3,
            translation_backoff: Duration::from_secs(1),
            source_language: SOURCE_LANGUAGE.to_string(),
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"translation_attempts": 5, "translation_backoff": 250}"#).unwrap();
        assert_eq!(config.translation_attempts, 5);
        assert_eq!(config.translation_backoff, Duration::from_millis(250));
        assert_eq!(config.summary_chunk_chars, 1000);
        assert_eq!(config.source_language, "en");
    }
}
