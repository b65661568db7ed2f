#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use nr_core::{
    Article, Error, ImageGenerator, NewsSearch, Result, SummarizationModel, SummaryBounds,
    TranslationModel,
};
use nr_digest::{DigestAssembler, PipelineConfig, Summarizer, Translator};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Summarizes a chunk as `<first word>…`; fails on the listed call numbers.
#[derive(Debug, Default)]
pub struct StubSummarizer {
    pub fail_on: Vec<usize>,
    pub calls: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn failing_on(fail_on: Vec<usize>) -> Self {
        Self { fail_on, ..Default::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizationModel for StubSummarizer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn summarize(&self, text: &str, _bounds: SummaryBounds) -> Result<String> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(text.to_string());
        if self.fail_on.contains(&index) {
            return Err(Error::Inference("CUDA out of memory".to_string()));
        }
        let first = text.split_whitespace().next().unwrap_or_default();
        Ok(format!("<{}>", first))
    }
}

/// Wraps text in `{lang|...}` and records every call.
#[derive(Debug, Default)]
pub struct StubTranslator {
    pub calls: Mutex<Vec<String>>,
}

#[async_trait]
impl TranslationModel for StubTranslator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        Ok(format!("{{{}|{}}}", target_language, text))
    }
}

#[derive(Debug, Default)]
pub struct StubSearch {
    pub articles: Vec<Article>,
}

#[async_trait]
impl NewsSearch for StubSearch {
    async fn search(&self, _query: &str, _location: Option<&str>) -> Vec<Article> {
        self.articles.clone()
    }
}

#[derive(Debug, Default)]
pub struct StubImages;

#[async_trait]
impl ImageGenerator for StubImages {
    async fn url_for(&self, prompt: &str) -> Option<String> {
        if prompt.contains("no-image") {
            None
        } else {
            Some(format!("https://img.test/{}", prompt.len()))
        }
    }
}

pub fn config() -> PipelineConfig {
    PipelineConfig {
        translation_backoff: Duration::from_millis(1),
        ..PipelineConfig::default()
    }
}

pub fn assembler(summarizer: Arc<StubSummarizer>, translator: Arc<StubTranslator>) -> DigestAssembler {
    assembler_with(summarizer, translator, config())
}

pub fn assembler_with(
    summarizer: Arc<StubSummarizer>,
    translator: Arc<StubTranslator>,
    config: PipelineConfig,
) -> DigestAssembler {
    let summarizer = Summarizer::new(summarizer, config.summary_chunk_chars);
    let translator = Translator::new(translator, "en").with_backoff(config.translation_backoff);
    DigestAssembler::new(summarizer, translator, config)
}

pub fn article(title: &str, text: &str) -> Article {
    Article {
        title: title.to_string(),
        raw_text: text.to_string(),
        url: "http://x".to_string(),
        source: "X".to_string(),
        ..Default::default()
    }
}

pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}
