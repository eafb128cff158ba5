use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::News;
use crate::fetcher::Fetcher;
use crate::parser;

/// Fetch `url` and parse the body.
///
/// `None` means nothing was retrieved; `Some` of an empty list means a
/// payload arrived but held no usable records.
pub async fn fetch_news_data(fetcher: &dyn Fetcher, url: &str) -> Option<Vec<News>> {
    let body = fetcher.fetch_text(url).await;
    let news = parser::parse(Some(body.as_str()));

    match &news {
        Some(news) => info!("Loaded {} stories from {}", news.len(), url),
        None => info!("No data retrieved from {}", url),
    }

    news
}

/// Runs one fetch-and-parse off the caller's task.
///
/// Each loader owns its URL and a handle to the fetcher; nothing mutable is
/// shared between loaders.
pub struct NewsLoader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    url: Option<String>,
}

impl NewsLoader {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, url: Option<String>) -> Self {
        Self { fetcher, url }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub async fn load_in_background(&self) -> Option<Vec<News>> {
        let url = self.url.as_deref()?;
        fetch_news_data(self.fetcher.as_ref(), url).await
    }

    /// Spawn the load on the runtime. Aborting the handle drops the request.
    pub fn start_loading(self) -> JoinHandle<Option<Vec<News>>> {
        tokio::spawn(async move { self.load_in_background().await })
    }

    /// Spawn the load and hand its result to `on_finished` on the same task.
    pub fn start_loading_with<F>(self, on_finished: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<Vec<News>>) + Send + 'static,
    {
        tokio::spawn(async move {
            let news = self.load_in_background().await;
            on_finished(news);
        })
    }
}
