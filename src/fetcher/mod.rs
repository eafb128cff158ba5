pub mod http_fetcher;

use async_trait::async_trait;
use tracing::warn;

use crate::app::{NewsError, Result};

pub use http_fetcher::HttpFetcher;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform a GET and return the body of a `200 OK` response.
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Like [`Fetcher::fetch`] but never fails: every error is logged and
    /// reduced to an empty string.
    async fn fetch_text(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                log_fetch_error(url, &e);
                String::new()
            }
        }
    }
}

/// Fetch `url` with a fresh default [`HttpFetcher`], returning an empty
/// string on any failure.
pub async fn fetch(url: &str) -> String {
    match HttpFetcher::new() {
        Ok(fetcher) => fetcher.fetch_text(url).await,
        Err(e) => {
            warn!("Failed to build HTTP client: {}", e);
            String::new()
        }
    }
}

fn log_fetch_error(url: &str, error: &NewsError) {
    match error {
        NewsError::InvalidUrl(e) => warn!("Problem building the URL {:?}: {}", url, e),
        NewsError::Status(code) => warn!("Error response code {} from {}", code, url),
        e => warn!("Problem retrieving the JSON results from {}: {}", url, e),
    }
}
