use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("NewsAPI error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(serde_json::Error),

    #[error("Article #{index} has no `{field}`")]
    MissingField { field: &'static str, index: usize },

    #[error("Lookback of {0} days is out of range")]
    Lookback(i64),

    #[error("NEWSAPI_KEY is not set")]
    MissingApiKey,

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
