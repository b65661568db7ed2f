use std::fmt;
use nr_core::{Error, Result, SummarizationModel, SummaryBounds};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Config;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: Parameters,
    options: Options,
}

#[derive(Serialize)]
struct Parameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Serialize)]
struct Options {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct SummaryText {
    summary_text: String,
}

/// BART summarization through the Hugging Face inference API.
pub struct HuggingFaceModel {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(config: Config) -> Result<Self> {
        let base = config.model_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = config.model_id.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            client: crate::http_client()?,
            api_key: config.api_key,
            endpoint: endpoint(&base, &model)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint(base: &str, model: &str) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), model.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{}: {}", joined, e)))
}

fn parse_summary(body: &str) -> Result<String> {
    let summaries: Vec<SummaryText> = serde_json::from_str(body)?;
    summaries
        .into_iter()
        .next()
        .map(|s| s.summary_text)
        .ok_or_else(|| Error::Inference("empty summarization response".to_string()))
}

#[async_trait::async_trait]
impl SummarizationModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: Parameters {
                max_length: bounds.max_length,
                min_length: bounds.min_length,
                do_sample: false,
            },
            options: Options { wait_for_model: true },
        };

        let mut builder = self.client.post(self.endpoint.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let body = crate::send(builder).await?.text().await?;
        tracing::debug!("summarization response: {} bytes", body.len());
        parse_summary(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let model = HuggingFaceModel::new(Config::default()).unwrap();
        assert_eq!(
            model.endpoint().as_str(),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_custom_endpoint() {
        let config = Config {
            model_url: Some("http://localhost:8080/models/".to_string()),
            model_id: Some("sshleifer/distilbart-cnn-12-6".to_string()),
            ..Default::default()
        };
        let model = HuggingFaceModel::new(config).unwrap();
        assert_eq!(model.endpoint().as_str(), "http://localhost:8080/models/sshleifer/distilbart-cnn-12-6");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = Config {
            model_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(HuggingFaceModel::new(config), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_summary() {
        let body = r#"[{"summary_text": "The council approved the budget."}]"#;
        assert_eq!(parse_summary(body).unwrap(), "The council approved the budget.");
        assert!(parse_summary("[]").is_err());
        assert!(parse_summary(r#"{"error": "Model is loading"}"#).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config {
            api_key: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let model = HuggingFaceModel::new(config).unwrap();
        assert!(!format!("{:?}", model).contains("hf_secret"));
    }
}
