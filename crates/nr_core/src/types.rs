use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as found by search or scraping, enriched during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub raw_text: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub ai_image_url: Option<String>,
}

impl Article {
    /// Text fed to the combined summary: raw text, else the summary.
    pub fn best_text(&self) -> Option<&str> {
        if !self.raw_text.is_empty() {
            Some(&self.raw_text)
        } else {
            self.summary.as_deref().filter(|s| !s.is_empty())
        }
    }
}

/// The final assembled and optionally translated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub title: String,
    pub slug: String,
    pub markdown_body: String,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn news() -> Self {
        Self {
            name: "News".to_string(),
            slug: "news".to_string(),
        }
    }
}

/// Payload handed to a publishing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub title: String,
    pub markdown_body: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub tags: Vec<Tag>,
}

impl PublishRequest {
    pub fn from_digest(digest: &Digest, tags: Vec<Tag>) -> Self {
        Self {
            title: digest.title.clone(),
            markdown_body: digest.markdown_body.clone(),
            slug: digest.slug.clone(),
            cover_image: digest.cover_image.clone(),
            tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_text_prefers_raw_text() {
        let mut article = Article {
            raw_text: "Body".to_string(),
            summary: Some("Summary".to_string()),
            ..Default::default()
        };
        assert_eq!(article.best_text(), Some("Body"));

        article.raw_text.clear();
        assert_eq!(article.best_text(), Some("Summary"));

        article.summary = Some(String::new());
        assert_eq!(article.best_text(), None);
    }

    #[test]
    fn test_article_deserializes_with_missing_fields() {
        let article: Article =
            serde_json::from_str(r#"{"title": "A", "url": "http://x"}"#).unwrap();
        assert_eq!(article.title, "A");
        assert!(article.raw_text.is_empty());
        assert!(article.summary.is_none());
    }
}
