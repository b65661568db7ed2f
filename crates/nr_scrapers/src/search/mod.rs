use serde::{Deserialize, Serialize};

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoNews;

/// Sites excluded from every query.
pub const EXCLUDED_SITES: &[&str] = &["msn.com", "usnews.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    On,
    Moderate,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeLimit {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub region: String,
    pub safesearch: SafeSearch,
    pub time_limit: TimeLimit,
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            region: "in-en".to_string(),
            safesearch: SafeSearch::Off,
            time_limit: TimeLimit::Month,
            max_results: 3,
        }
    }
}

/// `"{query} [{location} ]news -site:…"` with whitespace runs collapsed.
pub fn build_keywords(query: &str, location: Option<&str>) -> String {
    let mut keywords = query.to_string();
    if let Some(location) = location.filter(|l| !l.trim().is_empty()) {
        keywords.push(' ');
        keywords.push_str(location);
    }
    keywords.push_str(" news");
    for site in EXCLUDED_SITES {
        keywords.push_str(" -site:");
        keywords.push_str(site);
    }
    keywords.split_whitespace().collect::<Vec<_>>().join(" ")
}
