//! Fetches finance news from NewsAPI, keeps the most relevant articles and
//! writes them to a small JSON digest.

pub mod config;
pub mod error;
pub mod modules;
pub mod utils;

pub use crate::config::NewsProfile;
pub use crate::error::{DigestError, Result};
pub use crate::modules::perception::{Article, ArticleSource, NewsItem, NewsSentinel};
pub use crate::modules::selection::{select, KeywordSet};
pub use crate::modules::NewsDigest;
