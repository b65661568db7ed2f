use std::sync::Arc;
use chrono::Utc;
use nr_core::{
    Article, Digest, Error, ImageGenerator, NewsSearch, Notice, Outcome, PublishRequest,
    PublishedPost, Publisher, Result, Tag,
};
use tracing::{debug, info, warn};

use crate::assembler::{DigestAssembler, DigestRequest};
use crate::summarizer::Summarizer;

const PROMPT_SUMMARY_CHARS: usize = 100;

/// Prompt for an article illustration: the title, plus the start of the
/// summary when there is one.
pub fn image_prompt(article: &Article) -> String {
    let mut prompt = article.title.clone();
    if let Some(summary) = article.summary.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(" - ");
        prompt.extend(summary.chars().take(PROMPT_SUMMARY_CHARS));
    }
    prompt
}

/// End-to-end run: search, enrich each article, assemble, publish.
pub struct Roundup {
    search: Arc<dyn NewsSearch>,
    images: Option<Arc<dyn ImageGenerator>>,
    summarizer: Summarizer,
    assembler: DigestAssembler,
    tags: Vec<Tag>,
}

impl Roundup {
    pub fn new(search: Arc<dyn NewsSearch>, summarizer: Summarizer, assembler: DigestAssembler) -> Self {
        Self {
            search,
            images: None,
            summarizer,
            assembler,
            tags: vec![Tag::news()],
        }
    }

    pub fn with_images(mut self, images: Arc<dyn ImageGenerator>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Articles for a topic. An empty topic or an empty result is an error.
    pub async fn find(&self, topic: &str, location: Option<&str>) -> Result<Vec<Article>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::EmptyTopic);
        }
        let articles = self.search.search(topic, location).await;
        if articles.is_empty() {
            warn!(topic, ?location, "no articles found");
            return Err(Error::NoArticles);
        }
        info!("found {} articles for {}", articles.len(), topic);
        Ok(articles)
    }

    /// Fills `summary` for each article, in order. Articles that already carry
    /// a summary, or have no raw text to summarize, are left as they are.
    pub async fn summarize_articles(&self, articles: &mut [Article]) -> Vec<Notice> {
        let bounds = self.assembler.config().article_summary;
        let mut notices = Vec::new();
        for article in articles.iter_mut() {
            if article.summary.as_deref().is_some_and(|s| !s.trim().is_empty()) {
                debug!(title = %article.title, "keeping existing summary");
                continue;
            }
            if article.raw_text.trim().is_empty() {
                continue;
            }
            let summary = self
                .summarizer
                .summarize(&article.raw_text, bounds)
                .await
                .drain_into(&mut notices);
            article.summary = Some(summary).filter(|s| !s.is_empty());
        }
        notices
    }

    /// Fills `ai_image_url` where an illustration could be generated.
    pub async fn illustrate_articles(&self, articles: &mut [Article]) {
        let Some(images) = &self.images else {
            return;
        };
        for article in articles.iter_mut() {
            article.ai_image_url = images.url_for(&image_prompt(article)).await;
            if article.ai_image_url.is_none() {
                warn!(title = %article.title, "no illustration generated");
            }
        }
    }

    /// Summaries then illustrations for every article.
    pub async fn enrich(&self, articles: &mut [Article]) -> Vec<Notice> {
        let notices = self.summarize_articles(articles).await;
        self.illustrate_articles(articles).await;
        notices
    }

    /// Assembles a digest from articles the caller already holds.
    pub async fn digest(
        &self,
        mut articles: Vec<Article>,
        topic: &str,
        location: Option<&str>,
        language: &str,
    ) -> Result<Outcome<Digest>> {
        let mut notices = self.enrich(&mut articles).await;
        let request = DigestRequest::new(&articles, topic)
            .location(location)
            .language(language)
            .generated_at(Utc::now());
        let digest = self.assembler.assemble(request).await?.drain_into(&mut notices);
        Ok(Outcome::with_notices(digest, notices))
    }

    /// Search, enrich and assemble.
    pub async fn run(&self, topic: &str, location: Option<&str>, language: &str) -> Result<Outcome<Digest>> {
        let articles = self.find(topic, location).await?;
        self.digest(articles, topic, location, language).await
    }

    pub fn publish_request(&self, digest: &Digest) -> PublishRequest {
        PublishRequest::from_digest(digest, self.tags.clone())
    }

    pub async fn publish(&self, publisher: &dyn Publisher, digest: &Digest) -> Result<PublishedPost> {
        let post = publisher.publish(&self.publish_request(digest)).await?;
        info!(url = %post.url, "published digest");
        Ok(post)
    }
}
