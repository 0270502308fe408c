use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::time::Duration;

use crate::modules::selection::KeywordSet;

/// Terms OR-ed together into the NewsAPI `q` parameter.
pub const DEFAULT_QUERY_TERMS: &[&str] = &[
    "finance", "market", "investment", "stocks", "bonds", "etf", "derivatives", "trading",
    "portfolio", "hedge fund", "mutual fund", "asset allocation", "risk management",
    "yield curve", "interest rate", "central bank", "monetary policy", "equity",
    "fixed income", "commodities", "forex", "cryptocurrency",
];

/// NewsAPI 的免费档本来就只回看一个月，十年足够宽松
pub const MAX_LOOKBACK_DAYS: i64 = 3650;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NewsProfile {
    pub api_base_url: String,
    pub language: String,
    pub sort_by: String,
    pub lookback_days: i64,
    /// Upper bound on the digest length. Never a minimum.
    pub max_articles: usize,
    pub output_path: PathBuf,
    pub request_timeout_sec: u64,
    pub query_terms: Vec<String>,
    /// Empty means the built-in finance list.
    pub keywords: Vec<String>,
}

impl Default for NewsProfile {
    fn default() -> Self {
        Self {
            api_base_url: "https://newsapi.org".to_string(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            lookback_days: 30,
            max_articles: 7,
            output_path: PathBuf::from("trending_news.json"),
            request_timeout_sec: 30,
            query_terms: DEFAULT_QUERY_TERMS.iter().map(|s| s.to_string()).collect(),
            keywords: Vec::new(),
        }
    }
}

impl NewsProfile {
    /// Defaults, then `news_config.*` if present, then `NEWS_*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("news_config")
    }

    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("NEWS")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("query_terms")
                    .with_list_parse_key("keywords"),
            )
            .build()?;

        let profile: NewsProfile = settings.try_deserialize()?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_articles == 0 {
            return Err(ConfigError::Message("max_articles must be at least 1".into()));
        }
        if self.query_terms.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Message("query_terms must not be empty".into()));
        }
        if !(0..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(ConfigError::Message(format!(
                "lookback_days must be between 0 and {}",
                MAX_LOOKBACK_DAYS
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_sec)
    }

    pub fn keyword_set(&self) -> KeywordSet {
        if self.keywords.is_empty() {
            KeywordSet::finance()
        } else {
            KeywordSet::new(&self.keywords)
        }
    }
}
