use std::fmt;
use nr_core::{Error, Result, TranslationModel};
use reqwest::Client;
use serde_json::Value;

use crate::Config;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate web endpoint, source language auto-detected.
pub struct GoogleTranslateModel {
    client: Client,
    endpoint: String,
}

impl fmt::Debug for GoogleTranslateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslateModel")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GoogleTranslateModel {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: crate::http_client()?,
            endpoint: config.model_url.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

/// Joins the translated segments of a `translate_a/single` response:
/// `[[["translated", "source", ...], ...], ...]`.
fn parse_translation(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Inference("unexpected translation response shape".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[async_trait::async_trait]
impl TranslationModel for GoogleTranslateModel {
    fn name(&self) -> &str {
        "Google"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let request = self
            .client
            .post(&self.endpoint)
            .query(&[("client", "gtx"), ("sl", "auto"), ("tl", target_language), ("dt", "t")])
            .form(&[("q", text)]);
        let body = crate::send(request).await?.text().await?;
        parse_translation(&body)
    }
}
