use serde::{Serialize, Deserialize};

use crate::error::{DigestError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One record from the `articles` array of a NewsAPI response.
///
/// Every field is optional on the wire. Equality covers the whole record, so
/// two syndicated copies that differ only in `published_at` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// Lowercased `title + " " + description`, absent parts read as empty.
    pub fn search_text(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let description = self.description.as_deref().unwrap_or("");
        format!("{} {}", title, description).to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What ends up in `trending_news.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub date: String,
}

impl NewsItem {
    /// `index` is the article's position in the digest, used for the error only.
    pub fn from_article(article: &Article, index: usize) -> Result<Self> {
        let required = |value: &Option<String>, field: &'static str| {
            value.clone().ok_or(DigestError::MissingField { field, index })
        };

        Ok(Self {
            title: required(&article.title, "title")?,
            url: required(&article.url, "url")?,
            source: required(&article.source.name, "source.name")?,
            date: required(&article.published_at, "publishedAt")?,
        })
    }
}
