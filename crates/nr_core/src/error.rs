use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Transient request error: {0}")]
    Transient(String),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("No articles found")]
    NoArticles,

    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transient(_) => true,
            Error::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().map_or(false, |s| s.as_u16() == 429 || s.is_server_error())
            }
            _ => false,
        }
    }

    /// Maps a non-success HTTP status to the matching error kind.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = format!("HTTP {}: {}", status.as_u16(), body);
        if status.as_u16() == 429 || status.is_server_error() {
            Error::Transient(message)
        } else {
            Error::Inference(message)
        }
    }
}
