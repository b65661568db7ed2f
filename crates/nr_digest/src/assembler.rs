use chrono::{DateTime, Utc};
use nr_core::{Article, Digest, Error, Notice, Outcome, Result};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::document::{roundup_title, ArticleEntry, Document, Introduction};
use crate::slug::slugify;
use crate::summarizer::Summarizer;
use crate::translator::Translator;

/// Inputs of a single assembly.
#[derive(Debug, Clone)]
pub struct DigestRequest<'a> {
    pub articles: &'a [Article],
    pub topic: &'a str,
    pub location: Option<&'a str>,
    pub language: &'a str,
    /// Source of the publication date and of the fallback slug.
    pub generated_at: DateTime<Utc>,
}

impl<'a> DigestRequest<'a> {
    pub fn new(articles: &'a [Article], topic: &'a str) -> Self {
        Self {
            articles,
            topic,
            location: None,
            language: nr_core::SOURCE_LANGUAGE,
            generated_at: Utc::now(),
        }
    }

    pub fn location(mut self, location: Option<&'a str>) -> Self {
        self.location = location.map(str::trim).filter(|l| !l.is_empty());
        self
    }

    pub fn language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }

    pub fn generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// Builds the roundup document from already enriched articles.
#[derive(Debug, Clone)]
pub struct DigestAssembler {
    summarizer: Summarizer,
    translator: Translator,
    config: PipelineConfig,
}

impl DigestAssembler {
    pub fn new(summarizer: Summarizer, translator: Translator, config: PipelineConfig) -> Self {
        Self {
            summarizer,
            translator,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Concatenation of every article's raw text (or summary when the raw
    /// text is missing), each followed by a space.
    pub fn combined_text(articles: &[Article]) -> String {
        let mut combined = String::new();
        for text in articles.iter().filter_map(Article::best_text) {
            combined.push_str(text);
            combined.push(' ');
        }
        combined
    }

    /// Slug of `title`, or `news-roundup-<timestamp>` when it has none.
    /// Roundup titles always slugify to something, so the timestamp form only
    /// guards callers passing arbitrary titles.
    pub fn slug_for(title: &str, generated_at: DateTime<Utc>) -> String {
        let slug = slugify(title);
        if slug.is_empty() {
            format!("news-roundup-{}", generated_at.format("%Y%m%d%H%M%S"))
        } else {
            slug
        }
    }

    /// Cover image from the first article, trailing slashes removed.
    pub fn cover_image(articles: &[Article]) -> Option<String> {
        articles
            .first()
            .and_then(|a| a.image_url.as_deref())
            .map(|url| url.trim_end_matches(['/', '\\']).to_string())
            .filter(|url| !url.is_empty())
    }

    /// Fails only when there is nothing to assemble: no articles or no topic.
    /// Summarization and translation problems degrade the output and are
    /// reported as notices.
    pub async fn assemble(&self, request: DigestRequest<'_>) -> Result<Outcome<Digest>> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(Error::EmptyTopic);
        }
        if request.articles.is_empty() {
            return Err(Error::NoArticles);
        }

        info!(articles = request.articles.len(), topic, language = request.language, "assembling digest");
        let mut notices: Vec<Notice> = Vec::new();

        let combined_text = Self::combined_text(request.articles);
        let combined_summary = self
            .summarizer
            .summarize(&combined_text, self.config.combined_summary)
            .await
            .drain_into(&mut notices);

        let title = roundup_title(topic, request.location);
        let slug = Self::slug_for(&title, request.generated_at);

        let document = Document {
            title: title.clone(),
            published_on: request.generated_at.date_naive(),
            introduction: Introduction {
                topic: topic.to_string(),
                location: request.location.map(str::to_string),
            },
            combined_summary,
            entries: request
                .articles
                .iter()
                .enumerate()
                .map(|(i, article)| ArticleEntry::from_article(i + 1, article))
                .collect(),
        };
        let body = document.render();
        debug!(chars = body.len(), %slug, "rendered digest body");

        let (title, markdown_body) = if self.translator.is_identity(request.language) {
            (title, body)
        } else {
            let title = self.translate(&title, request.language).await.drain_into(&mut notices);
            let body = self.translate(&body, request.language).await.drain_into(&mut notices);
            (title, body)
        };

        let digest = Digest {
            title,
            slug,
            markdown_body,
            cover_image: Self::cover_image(request.articles),
        };
        Ok(Outcome::with_notices(digest, notices))
    }

    async fn translate(&self, text: &str, language: &str) -> Outcome<String> {
        self.translator
            .translate(
                text,
                language,
                self.config.translation_chunk_chars,
                self.config.translation_attempts,
            )
            .await
    }
}
