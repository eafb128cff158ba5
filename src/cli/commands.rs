use std::io::Read;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::cli::OutputFormat;
use crate::config::QueryConfig;
use crate::domain::News;
use crate::loader::fetch_news_data;
use crate::{parser, query};

pub async fn fetch(ctx: &AppContext, url: &str, format: OutputFormat) -> Result<()> {
    let news = fetch_news_data(ctx.fetcher.as_ref(), url).await;
    print!("{}", render(news.as_deref(), format)?);
    Ok(())
}

/// Overrides applied on top of the configured `[query]` section.
#[derive(Debug, Default)]
pub struct SearchArgs {
    pub section: Option<String>,
    pub query: Option<String>,
    pub page_size: Option<u32>,
    pub api_key: Option<String>,
}

impl SearchArgs {
    pub fn apply(self, base: &QueryConfig) -> QueryConfig {
        let mut config = base.clone();
        if self.section.is_some() {
            config.section = self.section;
        }
        if self.query.is_some() {
            config.search = self.query;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        config
    }
}

pub async fn search(ctx: &AppContext, args: SearchArgs, format: OutputFormat) -> Result<()> {
    let config = args.apply(&ctx.config.query);
    let url = query::build_url(&config)?;
    fetch(ctx, url.as_str(), format).await
}

pub fn parse(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let news = parser::parse(Some(raw.as_str()));
    print!("{}", render(news.as_deref(), format)?);
    Ok(())
}

/// Render a result for the terminal. Absent and empty results read the same.
pub fn render(news: Option<&[News]>, format: OutputFormat) -> Result<String> {
    let news = news.unwrap_or_default();

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(news)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text if news.is_empty() => Ok("No news found.\n".to_string()),
        OutputFormat::Text => {
            let mut out = String::new();
            for item in news {
                out.push_str(&format!(
                    "[{}] {}\n  {} | {}\n",
                    item.section_name,
                    item.web_title,
                    item.contributor,
                    item.display_date()
                ));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<News> {
        vec![
            News::new(
                "World",
                "2020-01-01T00:00:00Z",
                "Headline",
                "Jane Doe",
                "http://example.com/a",
            ),
            News::new(
                "World",
                "2020-01-01T00:00:00Z",
                "Headline",
                "No webTitle!",
                "No webUrl!",
            ),
        ]
    }

    #[test]
    fn test_render_text() {
        let out = render(Some(sample().as_slice()), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "[World] Headline\n  Jane Doe | 2020-01-01 00:00\n\
             [World] Headline\n  No webTitle! | 2020-01-01 00:00\n"
        );
    }

    #[test]
    fn test_render_absent_and_empty_alike() {
        let absent = render(None, OutputFormat::Text).unwrap();
        let empty = render(Some(&[][..]), OutputFormat::Text).unwrap();
        assert_eq!(absent, "No news found.\n");
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_render_json() {
        let out = render(Some(sample().as_slice()), OutputFormat::Json).unwrap();
        let parsed: Vec<News> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
        assert!(out.contains("\"web_url\": \"http://example.com/a\""));

        assert_eq!(render(None, OutputFormat::Json).unwrap(), "[]\n");
    }

    #[tokio::test]
    async fn test_search_requests_configured_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("section".into(), "world".into()),
                mockito::Matcher::UrlEncoded("show-tags".into(), "contributor".into()),
                mockito::Matcher::UrlEncoded("api-key".into(), "secret".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"response":{"results":[]}}"#)
            .create_async()
            .await;

        let mut config = crate::config::Config::default();
        config.query.endpoint = format!("{}/search", server.url());
        let ctx = AppContext::with_config(config).unwrap();

        let args = SearchArgs {
            section: Some("world".into()),
            api_key: Some("secret".into()),
            ..SearchArgs::default()
        };
        search(&ctx, args, OutputFormat::Text).await.unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn test_search_args_override_config() {
        let base = QueryConfig {
            section: Some("sport".into()),
            ..QueryConfig::default()
        };
        let args = SearchArgs {
            query: Some("tennis".into()),
            page_size: Some(3),
            ..SearchArgs::default()
        };

        let config = args.apply(&base);
        assert_eq!(config.section.as_deref(), Some("sport"));
        assert_eq!(config.search.as_deref(), Some("tennis"));
        assert_eq!(config.page_size, 3);
        assert_eq!(config.api_key, "test");
    }
}
