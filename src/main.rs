use std::process::ExitCode;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trending_news::utils::HttpClientFactory;
use trending_news::{NewsDigest, NewsProfile, NewsSentinel};

fn bootstrap() -> Result<NewsDigest> {
    let profile = NewsProfile::load().context("Failed to load news config")?;
    let client = HttpClientFactory::create(profile.request_timeout())?;
    let sentinel = NewsSentinel::from_env(client, &profile).context("Failed to set up NewsAPI client")?;
    Ok(NewsDigest::new(sentinel, &profile))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting trending news digest...");

    let digest = match bootstrap() {
        Ok(d) => d,
        Err(e) => {
            error!("CRITICAL: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // 退出码交给外部调度器 (cron) 判断
    if digest.run().await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
