pub mod error;
pub mod logging;
pub mod models;
pub mod outcome;
pub mod services;
pub mod types;

pub use error::Error;
pub use models::{SummarizationModel, SummaryBounds, TranslationModel};
pub use outcome::{Notice, Outcome, Stage};
pub use services::{ArticleFetcher, ImageGenerator, NewsSearch, Publisher};
pub use types::{Article, Digest, PublishRequest, PublishedPost, Tag};

pub type Result<T> = std::result::Result<T, Error>;

/// Language every article is assumed to be written in.
pub const SOURCE_LANGUAGE: &str = "en";
