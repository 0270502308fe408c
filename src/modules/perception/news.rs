use reqwest::Client;
use chrono::{DateTime, Duration, Utc};
use std::env;
use tracing::{debug, info};
use url::Url;

use crate::config::NewsProfile;
use crate::error::{DigestError, Result};
use super::structs::{Article, NewsApiResponse};

pub const API_KEY_VAR: &str = "NEWSAPI_KEY";

/// Pulls candidate articles from the NewsAPI `everything` endpoint.
pub struct NewsSentinel {
    client: Client,
    api_key: String,
    endpoint: Url,
    query: String,
    language: String,
    sort_by: String,
    lookback_days: i64,
}

impl NewsSentinel {
    pub fn new(client: Client, profile: &NewsProfile, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(DigestError::MissingApiKey);
        }
        let endpoint = Url::parse(&profile.api_base_url)?.join("/v2/everything")?;
        let query = profile
            .query_terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" OR ");

        Ok(Self {
            client,
            api_key,
            endpoint,
            query,
            language: profile.language.clone(),
            sort_by: profile.sort_by.clone(),
            lookback_days: profile.lookback_days,
        })
    }

    /// Reads the key from `NEWSAPI_KEY` (after `.env` has been loaded).
    pub fn from_env(client: Client, profile: &NewsProfile) -> Result<Self> {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        Self::new(client, profile, api_key)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn query_params(&self, now: DateTime<Utc>) -> Result<Vec<(&'static str, String)>> {
        // [修改] 回看天数过大时不能 panic，转为错误交给 run() 处理
        let from = Duration::try_days(self.lookback_days)
            .and_then(|d| now.checked_sub_signed(d))
            .ok_or(DigestError::Lookback(self.lookback_days))?
            .format("%Y-%m-%d")
            .to_string();
        Ok(vec![
            ("q", self.query.clone()),
            ("language", self.language.clone()),
            ("from", from),
            ("sortBy", self.sort_by.clone()),
            ("apiKey", self.api_key.clone()),
        ])
    }

    /// 原样返回 NewsAPI 的顺序（默认 sortBy=publishedAt，即最新优先）
    pub async fn fetch_candidates(&self) -> Result<Vec<Article>> {
        let params = self.query_params(Utc::now())?;
        // 不打印 apiKey
        debug!(
            "Querying {} q=\"{}\" (from={}, sortBy={})",
            self.endpoint(),
            self.query(),
            params[2].1,
            self.sort_by
        );

        let resp = self.client.get(self.endpoint.clone()).query(&params).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<NewsApiResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(DigestError::Api { status: status.as_u16(), message });
        }

        let parsed: NewsApiResponse = serde_json::from_str(&body).map_err(DigestError::Malformed)?;
        if parsed.status != "ok" {
            let message = match (parsed.code, parsed.message) {
                (Some(code), Some(msg)) => format!("{}: {}", code, msg),
                (None, Some(msg)) => msg,
                (Some(code), None) => code,
                (None, None) => format!("status \"{}\"", parsed.status),
            };
            return Err(DigestError::Api { status: status.as_u16(), message });
        }

        info!(
            "📰 NewsAPI totalResults: {}, articles in response: {}",
            parsed.total_results.map(|n| n.to_string()).unwrap_or_else(|| "?".into()),
            parsed.articles.len()
        );
        Ok(parsed.articles)
    }
}
