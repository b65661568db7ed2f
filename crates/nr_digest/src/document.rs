//! Typed sections of a roundup document and their markdown rendering.

use chrono::NaiveDate;
use nr_core::Article;
use std::fmt::{self, Write};

const UNKNOWN_SOURCE: &str = "Unknown Source";

/// `str::title`-style casing: the first letter of every run of letters is
/// upper-cased, the rest lower-cased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// `News Roundup: {Topic}[ in {Location}]`
pub fn roundup_title(topic: &str, location: Option<&str>) -> String {
    let mut title = format!("News Roundup: {}", title_case(topic));
    if let Some(location) = location {
        let _ = write!(title, " in {}", title_case(location));
    }
    title
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Introduction {
    pub topic: String,
    pub location: Option<String>,
}

/// One `### N. Title` subsection.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleEntry {
    pub position: usize,
    pub heading: String,
    pub source: String,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub ai_image_url: Option<String>,
}

impl ArticleEntry {
    /// `position` is 1-based.
    pub fn from_article(position: usize, article: &Article) -> Self {
        let title = single_line(&article.title);
        let heading = if title.is_empty() {
            format!("Article #{}", position)
        } else {
            title
        };
        let source = if article.source.trim().is_empty() {
            UNKNOWN_SOURCE.to_string()
        } else {
            article.source.clone()
        };
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

        Self {
            position,
            heading,
            source,
            url: Some(article.url.clone()).filter(|u| !u.is_empty()),
            summary: non_empty(&article.summary),
            image_url: non_empty(&article.image_url),
            ai_image_url: non_empty(&article.ai_image_url),
        }
    }
}

/// A roundup document before rendering. Section order is fixed by `render`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub published_on: NaiveDate,
    pub introduction: Introduction,
    pub combined_summary: String,
    pub entries: Vec<ArticleEntry>,
}

impl Document {
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_entry(f: &mut fmt::Formatter<'_>, entry: &ArticleEntry) -> fmt::Result {
        write!(f, "### {}. {}\n\n", entry.position, entry.heading)?;
        write!(f, "**Source**: {}\n\n", entry.source)?;
        if let Some(url) = &entry.url {
            write!(f, "**Read Full Article**: [Link]({})\n\n", url)?;
        }
        if let Some(summary) = &entry.summary {
            write!(f, "**Article Summary**:\n\n{}\n\n", summary)?;
        }
        if let Some(image) = &entry.image_url {
            write!(f, "**Original Image**:\n\n![Original Article Image]({})\n\n", image)?;
        }
        if let Some(image) = &entry.ai_image_url {
            write!(f, "**AI-Generated Illustration**:\n\n![AI Generated Illustration]({})\n\n", image)?;
            f.write_str("*AI-generated image related to this article.*\n\n")?;
        }
        f.write_str("---\n\n")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.published_on.format("%Y-%m-%d");

        write!(f, "# {}\n\n", self.title)?;
        write!(f, "*Published on {}*\n\n", date)?;

        f.write_str("## Introduction\n")?;
        write!(f, "Below you'll find a curated overview of the latest news about **{}**", self.introduction.topic)?;
        if let Some(location) = &self.introduction.location {
            write!(f, " in **{}**", location)?;
        }
        f.write_str(". This post aggregates multiple sources and includes both original and AI-generated images.\n\n")?;

        f.write_str("## Combined Summary\n")?;
        write!(f, "{}\n\n", self.combined_summary)?;

        f.write_str("## Detailed Summaries\n\n")?;
        for entry in &self.entries {
            Self::write_entry(f, entry)?;
        }

        f.write_str("\n\n---\n")?;
        write!(f, "*This news roundup was automatically curated and published using AI. Last updated: {}*", date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            raw_text: "Body.".to_string(),
            url: "http://x".to_string(),
            source: "X".to_string(),
            ..Default::default()
        }
    }

    fn document(entries: Vec<ArticleEntry>) -> Document {
        Document {
            title: roundup_title("ai", Some("paris")),
            published_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            introduction: Introduction {
                topic: "ai".to_string(),
                location: Some("paris".to_string()),
            },
            combined_summary: "Everything happened.".to_string(),
            entries,
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ai"), "Ai");
        assert_eq!(title_case("new YORK city"), "New York City");
        assert_eq!(title_case("o'neil 3d-printing"), "O'Neil 3D-Printing");
    }

    #[test]
    fn test_roundup_title() {
        assert_eq!(roundup_title("climate change", None), "News Roundup: Climate Change");
        assert_eq!(roundup_title("ai", Some("paris")), "News Roundup: Ai in Paris");
    }

    #[test]
    fn test_entry_fallbacks() {
        let mut a = article("  ");
        a.source.clear();
        a.url.clear();
        a.summary = Some(String::new());
        let entry = ArticleEntry::from_article(4, &a);

        assert_eq!(entry.heading, "Article #4");
        assert_eq!(entry.source, "Unknown Source");
        assert!(entry.url.is_none());
        assert!(entry.summary.is_none());
    }

    #[test]
    fn test_heading_is_single_line() {
        let entry = ArticleEntry::from_article(1, &article("Breaking\nnews  today"));
        assert_eq!(entry.heading, "Breaking news today");
    }

    #[test]
    fn test_render_section_order() {
        let mut a = article("A");
        a.summary = Some("Short.".to_string());
        a.image_url = Some("http://img/a.png".to_string());
        a.ai_image_url = Some("http://ai/a.png".to_string());
        let body = document(vec![ArticleEntry::from_article(1, &a)]).render();

        let order = [
            "# News Roundup: Ai in Paris\n\n*Published on 2024-03-01*",
            "## Introduction\nBelow you'll find a curated overview of the latest news about **ai** in **paris**.",
            "## Combined Summary\nEverything happened.\n\n",
            "## Detailed Summaries\n\n### 1. A\n\n**Source**: X\n\n**Read Full Article**: [Link](http://x)",
            "**Article Summary**:\n\nShort.",
            "![Original Article Image](http://img/a.png)",
            "![AI Generated Illustration](http://ai/a.png)\n\n*AI-generated image related to this article.*\n\n---\n\n",
            "\n\n---\n*This news roundup was automatically curated and published using AI. Last updated: 2024-03-01*",
        ];
        let mut cursor = 0;
        for part in order {
            let found = body[cursor..].find(part).unwrap_or_else(|| panic!("missing or out of order: {part:?}"));
            cursor += found + part.len();
        }
        assert_eq!(cursor, body.len());
    }

    #[test]
    fn test_render_skips_absent_parts() {
        let body = document(vec![ArticleEntry::from_article(1, &article("A"))]).render();
        assert!(!body.contains("**Article Summary**"));
        assert!(!body.contains("Original Image"));
        assert!(!body.contains("AI-Generated Illustration"));
    }
}
