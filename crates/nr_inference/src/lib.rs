use nr_core::{Error, Result};
use std::time::Duration;

pub mod models;
pub mod translation;

/// Default request timeout for model endpoints.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Selects and configures a model backend.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    /// Backend name, e.g. `huggingface`, `chat`, `dummy`.
    pub model_name: Option<String>,
    /// Model identifier on the remote backend, e.g. `facebook/bart-large-cnn`.
    pub model_id: Option<String>,
    /// Endpoint override.
    pub model_url: Option<String>,
}

impl Config {
    pub fn with_model(model_name: impl Into<String>) -> Self {
        Self {
            model_name: Some(model_name.into()),
            ..Default::default()
        }
    }
}

pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))
}

/// Sends a prepared request and turns non-success statuses into errors,
/// marking 429/5xx and network failures as transient.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            Error::Transient(e.to_string())
        } else {
            Error::Http(e)
        }
    })?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::from_status(status, &body))
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::translation::create_translator;
    pub use nr_core::{Error, Result, SummarizationModel, SummaryBounds, TranslationModel};
}

pub use models::create_model;
pub use translation::create_translator;
