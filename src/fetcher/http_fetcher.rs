use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::app::{NewsError, Result};
use crate::config::HttpConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Client with the default timeouts: 15s to connect, 10s per read.
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            // No idle pool: each connection closes once its response is dropped.
            .pool_max_idle_per_host(0)
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        debug!("GET {}", url);

        // The response owns the connection; it is released when dropped on
        // any of the return paths below.
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
