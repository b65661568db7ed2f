//! Content pipeline for news roundups: sentence-aligned chunking, chunked
//! summarization, chunked translation with retry, slugs, and assembly of
//! the final markdown digest.

pub mod assembler;
pub mod chunker;
pub mod config;
pub mod document;
pub mod roundup;
pub mod slug;
pub mod summarizer;
pub mod translator;

pub use assembler::{DigestAssembler, DigestRequest};
pub use chunker::{Chunk, Chunker, Chunks, Segmentation};
pub use config::PipelineConfig;
pub use document::{roundup_title, title_case, ArticleEntry, Document, Introduction};
pub use roundup::Roundup;
pub use slug::slugify;
pub use summarizer::Summarizer;
pub use translator::Translator;

use std::sync::Arc;
use nr_core::{SummarizationModel, TranslationModel};

/// Summarizer, translator and assembler wired from one config.
pub fn build_assembler(
    summarization: Arc<dyn SummarizationModel>,
    translation: Arc<dyn TranslationModel>,
    config: PipelineConfig,
) -> (Summarizer, DigestAssembler) {
    let summarizer = Summarizer::new(summarization, config.summary_chunk_chars);
    let translator = Translator::new(translation, config.source_language.clone())
        .with_backoff(config.translation_backoff);
    let assembler = DigestAssembler::new(summarizer.clone(), translator, config);
    (summarizer, assembler)
}

pub mod prelude {
    pub use super::{build_assembler, DigestAssembler, DigestRequest, PipelineConfig, Roundup, Summarizer, Translator};
    pub use nr_core::{Article, Digest, Error, Outcome, Result};
}
