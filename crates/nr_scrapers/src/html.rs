use nr_core::{Error, Result};
use scraper::{Html, Selector};
use url::Url;

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
}

fn selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Scraping(format!("Invalid selector {}: {}", selector, e)))
}

/// Whitespace-collapsed text of the first element matching `selector`.
pub fn extract_text(document: &Html, selector_str: &str) -> Result<String> {
    let selector = selector(selector_str)?;
    document
        .select(&selector)
        .next()
        .map(|el| collapse(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .ok_or_else(|| Error::Scraping(format!("No element found for selector: {}", selector_str)))
}

/// Text of every element matching `selector`, empty ones skipped.
pub fn extract_texts(document: &Html, selector_str: &str) -> Result<Vec<String>> {
    let selector = selector(selector_str)?;
    Ok(document
        .select(&selector)
        .map(|el| collapse(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect())
}

/// `content` of the first `<meta>` whose `property` or `name` is `key`.
pub fn meta_content(document: &Html, key: &str) -> Option<String> {
    let selector = selector(&format!("meta[property='{key}'], meta[name='{key}']")).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

pub fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert_eq!(parse_url("https://news.test/a?b=1").unwrap().host_str(), Some("news.test"));
        assert!(matches!(parse_url("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_extract_text() {
        let document = Html::parse_document(
            r#"<header><h1>  Floods
                hit the coast </h1></header><p class="lede">Rain continues.</p>"#,
        );

        assert_eq!(extract_text(&document, "h1").unwrap(), "Floods hit the coast");
        assert!(extract_text(&document, "h2").is_err());
    }

    #[test]
    fn test_extract_texts() {
        let document = Html::parse_document(
            "<article><p>First paragraph.</p><p>\n </p><p>Second\nparagraph.</p></article>",
        );

        let paragraphs = extract_texts(&document, "article p").unwrap();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_meta_content() {
        let html = r#"<html><head>
            <meta property="og:image" content=" https://img.test/a.jpg ">
            <meta name="description" content="About things">
        </head></html>"#;
        let document = Html::parse_document(html);

        assert_eq!(meta_content(&document, "og:image").as_deref(), Some("https://img.test/a.jpg"));
        assert_eq!(meta_content(&document, "description").as_deref(), Some("About things"));
        assert_eq!(meta_content(&document, "og:title"), None);
    }
}
