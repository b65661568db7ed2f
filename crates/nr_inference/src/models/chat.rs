use std::fmt;
use nr_core::{Error, Result, SummarizationModel, SummaryBounds};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Config;

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Summarization through any OpenAI-compatible chat completion endpoint
/// (DeepSeek, OpenAI, a local Ollama server).
pub struct ChatModel {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl fmt::Debug for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl ChatModel {
    pub fn new(config: Config) -> Result<Self> {
        let base_url = config
            .model_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: crate::http_client()?,
            api_key: config.api_key,
            base_url,
            model: config.model_id.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

fn prompt(text: &str, bounds: SummaryBounds) -> String {
    format!(
        "Summarize the following news text in plain prose, between {} and {} words. \
         Use only facts stated in the text and reply with the summary only.\n\n{}",
        bounds.min_length, bounds.max_length, text
    )
}

#[async_trait::async_trait]
impl SummarizationModel for ChatModel {
    fn name(&self) -> &str {
        "Chat"
    }

    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt(text, bounds),
            }],
            max_tokens: bounds.max_length * 2,
            temperature: 0.0,
        };

        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = crate::send(builder).await?.json::<ChatResponse>().await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::Inference("chat completion returned no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = ChatModel::new(Config::default()).unwrap();
        assert_eq!(model.base_url, "https://api.deepseek.com/v1");
        assert_eq!(model.model, "deepseek-chat");
    }

    #[test]
    fn test_local_endpoint() {
        let config = Config {
            model_url: Some("http://localhost:11434/v1/".to_string()),
            model_id: Some("llama3".to_string()),
            ..Default::default()
        };
        let model = ChatModel::new(config).unwrap();
        assert_eq!(model.base_url, "http://localhost:11434/v1");
        assert_eq!(model.model, "llama3");
    }

    #[test]
    fn test_prompt_mentions_bounds() {
        let prompt = prompt("Body.", SummaryBounds::new(130, 30));
        assert!(prompt.contains("between 30 and 130 words"));
        assert!(prompt.ends_with("\n\nBody."));
    }
}
