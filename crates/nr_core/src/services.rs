use async_trait::async_trait;

use crate::types::{Article, PublishRequest, PublishedPost};
use crate::Result;

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Find recent articles for a topic, optionally narrowed to a location.
    /// Provider failures are reported as an empty list.
    async fn search(&self, query: &str, location: Option<&str>) -> Vec<Article>;
}

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Download and parse an article. Never fails: unreadable pages
    /// come back as the sentinel article.
    async fn fetch(&self, url: &str) -> Article;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// URL of an illustration for `prompt`, if one could be produced.
    async fn url_for(&self, prompt: &str) -> Option<String>;
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> Result<PublishedPost>;
}
