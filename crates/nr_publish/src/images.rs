use async_trait::async_trait;
use nr_core::{ImageGenerator, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://image.pollinations.ai/prompt";

/// Prompt-addressed illustrations from Pollinations.
#[derive(Debug, Clone)]
pub struct PollinationsImages {
    client: Client,
    base_url: String,
}

impl PollinationsImages {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Image URL for `prompt`, every reserved character percent-encoded.
    pub fn prompt_url(&self, prompt: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), urlencoding::encode(prompt))
    }
}

#[async_trait]
impl ImageGenerator for PollinationsImages {
    async fn url_for(&self, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() {
            return None;
        }
        let url = self.prompt_url(prompt);
        match self.client.head(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => Some(url),
            Ok(response) => {
                debug!(status = %response.status(), "image not available");
                None
            }
            Err(e) => {
                debug!("image check failed: {}", e);
                None
            }
        }
    }
}
