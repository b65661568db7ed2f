use async_trait::async_trait;
use nr_core::{Article, ArticleFetcher, Error, Result};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

use crate::html::{self, collapse};
use crate::jsonld;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const UNAVAILABLE_TITLE: &str = "Article Preview Unavailable";
pub const UNAVAILABLE_TEXT: &str = "Full article content could not be retrieved. \
    You can visit the original source for complete information.";

/// Placeholder returned when an article cannot be downloaded or parsed.
pub fn sentinel_article(url: &str) -> Article {
    Article {
        title: UNAVAILABLE_TITLE.to_string(),
        raw_text: UNAVAILABLE_TEXT.to_string(),
        url: url.to_string(),
        source: source_name(url),
        ..Default::default()
    }
}

pub fn is_sentinel(article: &Article) -> bool {
    article.title == UNAVAILABLE_TITLE && article.raw_text == UNAVAILABLE_TEXT
}

/// Host of `url` without a leading `www.`.
pub fn source_name(url: &str) -> String {
    html::parse_url(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_default()
}

/// Title, body, date and lead image of an article page.
pub fn parse_article(url: &str, page: &str) -> Result<Article> {
    let document = Html::parse_document(page);

    let title = html::meta_content(&document, "og:title")
        .or_else(|| html::extract_text(&document, "h1").ok())
        .or_else(|| html::extract_text(&document, "title").ok())
        .unwrap_or_default();

    let mut paragraphs = html::extract_texts(&document, "article p")?;
    if paragraphs.is_empty() {
        paragraphs = html::extract_texts(&document, "p")?;
    }
    let text = collapse(&paragraphs.join(" "));
    if text.is_empty() {
        return Err(Error::Scraping(format!("No article text found at {}", url)));
    }

    let publish_date = jsonld::extract_published_date(&document).or_else(|| {
        html::meta_content(&document, "article:published_time").and_then(|raw| jsonld::parse_date(&raw))
    });
    let image_url = html::meta_content(&document, "og:image").or_else(|| jsonld::extract_image(&document));

    Ok(Article {
        title,
        raw_text: text,
        url: url.to_string(),
        source: html::meta_content(&document, "og:site_name").unwrap_or_else(|| source_name(url)),
        publish_date,
        image_url,
        ..Default::default()
    })
}

/// Downloads pages with a browser user agent and parses them.
#[derive(Debug, Clone)]
pub struct HtmlArticleFetcher {
    client: Client,
}

impl HtmlArticleFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<Article> {
        html::parse_url(url)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let page = response.text().await?;
        debug!("downloaded {} bytes from {}", page.len(), url);
        parse_article(url, &page)
    }
}

#[async_trait]
impl ArticleFetcher for HtmlArticleFetcher {
    async fn fetch(&self, url: &str) -> Article {
        match self.try_fetch(url).await {
            Ok(article) => article,
            Err(e) => {
                warn!("could not fetch {}: {}", url, e);
                sentinel_article(url)
            }
        }
    }
}
