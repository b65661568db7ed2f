use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use serde_json::Value;

/// Every JSON-LD object in the document, with `@graph` arrays flattened.
fn json_ld_objects(document: &Html) -> Vec<Value> {
    let mut objects = Vec::new();

    if let Ok(script_selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&script_selector) {
            if let Ok(json) = serde_json::from_str::<Value>(script.text().collect::<String>().trim()) {
                flatten(json, &mut objects);
            }
        }
    }

    objects
}

fn flatten(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.into_iter().for_each(|item| flatten(item, out)),
        Value::Object(mut obj) => {
            if let Some(graph) = obj.remove("@graph") {
                flatten(graph, out);
            }
            out.push(Value::Object(obj));
        }
        _ => {}
    }
}

/// `datePublished` from JSON-LD metadata.
pub fn extract_published_date(document: &Html) -> Option<DateTime<Utc>> {
    json_ld_objects(document)
        .iter()
        .filter_map(|obj| obj.get("datePublished").and_then(Value::as_str))
        .find_map(parse_date)
}

/// `image` from JSON-LD metadata; accepts a string, an object with `url`,
/// or an array of either.
pub fn extract_image(document: &Html) -> Option<String> {
    json_ld_objects(document)
        .iter()
        .filter_map(|obj| obj.get("image"))
        .find_map(image_url)
}

fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Object(obj) => obj.get("url").and_then(image_url),
        Value::Array(items) => items.iter().find_map(image_url),
        _ => None,
    }
}

pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
