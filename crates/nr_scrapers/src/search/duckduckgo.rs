use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nr_core::{Article, Error, NewsSearch, Result};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, error, info};

use super::{build_keywords, SafeSearch, SearchSettings, TimeLimit};
use crate::fetch::BROWSER_USER_AGENT;

const BASE_URL: &str = "https://duckduckgo.com";

static VQD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"vqd=["']?([0-9-]+)"#).unwrap());

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    results: Vec<NewsResult>,
}

#[derive(Debug, Deserialize)]
struct NewsResult {
    #[serde(default)]
    date: Option<i64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
    url: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    source: String,
}

impl From<NewsResult> for Article {
    fn from(result: NewsResult) -> Self {
        Article {
            title: result.title,
            raw_text: result.excerpt,
            url: result.url,
            source: result.source,
            publish_date: result.date.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            image_url: result.image.filter(|i| !i.is_empty()),
            ..Default::default()
        }
    }
}

fn safesearch_param(safesearch: SafeSearch) -> &'static str {
    match safesearch {
        SafeSearch::On => "1",
        SafeSearch::Moderate => "-1",
        SafeSearch::Off => "-2",
    }
}

fn time_limit_param(time_limit: TimeLimit) -> &'static str {
    match time_limit {
        TimeLimit::Day => "d",
        TimeLimit::Week => "w",
        TimeLimit::Month => "m",
    }
}

/// Search token embedded in the DuckDuckGo landing page.
pub fn extract_vqd(page: &str) -> Option<String> {
    VQD.captures(page).map(|caps| caps[1].to_string())
}

/// Articles from a `news.js` response, at most `limit`.
pub fn parse_news(body: &str, limit: usize) -> Result<Vec<Article>> {
    let response: NewsResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .filter(|r| !r.url.is_empty())
        .take(limit)
        .map(Article::from)
        .collect())
}

/// News search through DuckDuckGo's news endpoint.
#[derive(Debug, Clone)]
pub struct DuckDuckGoNews {
    client: Client,
    settings: SearchSettings,
    base_url: String,
}

impl DuckDuckGoNews {
    pub fn new(settings: SearchSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            client,
            settings,
            base_url: BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    async fn vqd(&self, keywords: &str) -> Result<String> {
        let page = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("q", keywords)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        extract_vqd(&page).ok_or_else(|| Error::Scraping("search token not found".to_string()))
    }

    async fn try_search(&self, keywords: &str) -> Result<Vec<Article>> {
        let vqd = self.vqd(keywords).await?;
        debug!(%vqd, "obtained search token");

        let body = self
            .client
            .get(format!("{}/news.js", self.base_url))
            .query(&[
                ("l", self.settings.region.as_str()),
                ("o", "json"),
                ("noamp", "1"),
                ("q", keywords),
                ("vqd", vqd.as_str()),
                ("p", safesearch_param(self.settings.safesearch)),
                ("df", time_limit_param(self.settings.time_limit)),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_news(&body, self.settings.max_results)
    }
}

#[async_trait]
impl NewsSearch for DuckDuckGoNews {
    async fn search(&self, query: &str, location: Option<&str>) -> Vec<Article> {
        let keywords = build_keywords(query, location);
        info!("🔍 Searching news: {}", keywords);
        match self.try_search(&keywords).await {
            Ok(articles) => {
                info!("found {} articles", articles.len());
                articles
            }
            Err(e) => {
                error!("Error in DuckDuckGo news search: {}", e);
                Vec::new()
            }
        }
    }
}
