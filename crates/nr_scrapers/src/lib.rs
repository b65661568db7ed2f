pub mod fetch;
pub mod html;
pub mod jsonld;
pub mod search;

pub use fetch::{is_sentinel, sentinel_article, HtmlArticleFetcher};
pub use search::{DuckDuckGoNews, SearchSettings};

pub mod prelude {
    pub use super::{DuckDuckGoNews, HtmlArticleFetcher, SearchSettings};
    pub use nr_core::{Article, ArticleFetcher, Error, NewsSearch, Result};
}
