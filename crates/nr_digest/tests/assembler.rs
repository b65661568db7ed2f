mod common;

use common::*;
use nr_core::{Error, Stage};
use nr_digest::{DigestRequest, PipelineConfig};
use std::sync::Arc;

#[tokio::test]
async fn test_single_article_digest() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let articles = vec![article("A", "Sentence one. Sentence two.")];

    let outcome = assembler
        .assemble(DigestRequest::new(&articles, "ai").generated_at(noon()))
        .await
        .unwrap();
    let digest = outcome.value;

    assert!(digest.title.starts_with("News Roundup: Ai"));
    assert_eq!(digest.slug, "news-roundup-ai");
    assert!(digest.markdown_body.contains("## Combined Summary\n<Sentence>\n\n"));
    assert_eq!(digest.markdown_body.matches("### 1. A").count(), 1);
    assert!(digest.markdown_body.contains("*Published on 2024-03-01*"));
    assert!(digest.cover_image.is_none());
    assert!(outcome.notices.is_empty());
}

#[tokio::test]
async fn test_location_in_title_and_slug() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let articles = vec![article("A", "Text.")];

    let digest = assembler
        .assemble(DigestRequest::new(&articles, "ai").location(Some("paris")).generated_at(noon()))
        .await
        .unwrap()
        .value;

    assert_eq!(digest.title, "News Roundup: Ai in Paris");
    assert!(digest.slug.contains("paris"));
    assert!(digest.markdown_body.contains("about **ai** in **paris**."));
}

#[tokio::test]
async fn test_blank_location_is_ignored() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let articles = vec![article("A", "Text.")];

    let digest = assembler
        .assemble(DigestRequest::new(&articles, "ai").location(Some("  ")).generated_at(noon()))
        .await
        .unwrap()
        .value;

    assert_eq!(digest.title, "News Roundup: Ai");
}

#[tokio::test]
async fn test_failed_chunk_keeps_its_text() {
    let summarizer = Arc::new(StubSummarizer::failing_on(vec![1]));
    let config = PipelineConfig {
        summary_chunk_chars: 20,
        ..config()
    };
    let assembler = assembler_with(summarizer.clone(), Arc::new(StubTranslator::default()), config);
    let articles = vec![
        article("A", "Alpha chunk text."),
        article("B", "Bravo chunk text."),
        article("C", "Charlie chunk text."),
    ];

    let outcome = assembler
        .assemble(DigestRequest::new(&articles, "ai").generated_at(noon()))
        .await
        .unwrap();

    assert_eq!(summarizer.calls().len(), 3);
    assert!(outcome
        .value
        .markdown_body
        .contains("## Combined Summary\n<Alpha> Bravo chunk text. <Charlie>\n\n"));
    assert_eq!(outcome.notices.len(), 1);
    assert_eq!(outcome.notices[0].stage, Stage::Summarize);
    assert_eq!(outcome.notices[0].segment, 1);
}

#[tokio::test]
async fn test_no_articles_is_an_error() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let result = assembler.assemble(DigestRequest::new(&[], "ai")).await;
    assert!(matches!(result, Err(Error::NoArticles)));
}

#[tokio::test]
async fn test_empty_topic_is_an_error() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let articles = vec![article("A", "Text.")];
    let result = assembler.assemble(DigestRequest::new(&articles, "   ")).await;
    assert!(matches!(result, Err(Error::EmptyTopic)));
}

#[tokio::test]
async fn test_translation_applies_to_finished_document() {
    let summarizer = Arc::new(StubSummarizer::default());
    let translator = Arc::new(StubTranslator::default());
    let assembler = assembler(summarizer.clone(), translator.clone());
    let mut a = article("A", "Text.");
    a.summary = Some("Already summarized.".to_string());
    let articles = vec![a];

    let digest = assembler
        .assemble(DigestRequest::new(&articles, "ai").language("fr").generated_at(noon()))
        .await
        .unwrap()
        .value;

    let calls = translator.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], "News Roundup: Ai");
    assert!(calls[1].starts_with("# News Roundup: Ai\n\n"));
    assert!(calls[1].contains("**Article Summary**:\n\nAlready summarized."));

    assert_eq!(digest.title, "{fr|News Roundup: Ai}");
    assert!(digest.markdown_body.starts_with("{fr|# News Roundup: Ai"));
    // slug is derived from the untranslated title
    assert_eq!(digest.slug, "news-roundup-ai");
    // summarizer never saw translated text
    assert!(summarizer.calls().iter().all(|c| !c.contains("{fr|")));
}

#[tokio::test]
async fn test_long_body_is_translated_in_slices() {
    let translator = Arc::new(StubTranslator::default());
    let config = PipelineConfig {
        translation_chunk_chars: 100,
        ..config()
    };
    let assembler = assembler_with(Arc::new(StubSummarizer::default()), translator.clone(), config);
    let articles = vec![article("A", "Text.")];

    assembler
        .assemble(DigestRequest::new(&articles, "ai").language("de").generated_at(noon()))
        .await
        .unwrap();

    let calls = translator.calls.lock().unwrap().clone();
    assert!(calls.len() > 2);
    assert!(calls[1..].iter().all(|c| c.chars().count() <= 100));
}

#[tokio::test]
async fn test_output_is_deterministic() {
    let articles = vec![article("A", "One. Two."), article("", "Three.")];
    let first = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()))
        .assemble(DigestRequest::new(&articles, "ai").generated_at(noon()))
        .await
        .unwrap();
    let second = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()))
        .assemble(DigestRequest::new(&articles, "ai").generated_at(noon()))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(first.value.markdown_body.contains("### 2. Article #2"));
}

#[tokio::test]
async fn test_cover_image_from_first_article() {
    let assembler = assembler(Arc::new(StubSummarizer::default()), Arc::new(StubTranslator::default()));
    let mut a = article("A", "Text.");
    a.image_url = Some("https://cdn.test/cover.jpg/".to_string());
    let articles = vec![a];

    let digest = assembler
        .assemble(DigestRequest::new(&articles, "ai").generated_at(noon()))
        .await
        .unwrap()
        .value;

    assert_eq!(digest.cover_image.as_deref(), Some("https://cdn.test/cover.jpg"));
    assert!(digest.markdown_body.contains("![Original Article Image](https://cdn.test/cover.jpg/)"));
}
