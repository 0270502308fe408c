use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// [修改] NewsAPI 会拒绝没有 User-Agent 的请求
    /// `timeout` 限制整个请求，超时按传输错误处理
    pub fn create(timeout: Duration) -> Result<Client> {
        let builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .tcp_keepalive(Some(Duration::from_secs(30)));

        debug!("🌐 [Http Client] timeout {}s", timeout.as_secs());

        let client = builder.build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_short_timeout() {
        assert!(HttpClientFactory::create(Duration::from_secs(2)).is_ok());
    }
}
