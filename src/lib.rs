//! # newsfeed
//!
//! Fetches a news search API response and flattens it into a list of
//! story records.
//!
//! ## Architecture
//!
//! ```text
//! Query URL → Fetcher → raw text → Parser → Vec<News> → caller
//! ```
//!
//! - [`fetcher`]: HTTP GET with bounded timeouts, empty text on failure
//! - [`parser`]: JSON envelope walking, one record per story tag
//! - [`loader`]: runs the pipeline on a background task
//!
//! ## Quick Start
//!
//! ```bash
//! # Latest stories from the configured query
//! newsfeed search --section world
//!
//! # A hand-built query URL
//! newsfeed fetch "https://content.guardianapis.com/search?show-tags=contributor&api-key=test"
//!
//! # A saved response, as JSON
//! newsfeed --format json parse response.json
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configuration to a
/// shared fetcher.
pub mod app;

/// Configuration loaded from `~/.config/newsfeed/config.toml`:
/// - HTTP timeouts and user agent
/// - Default search query parameters
pub mod config;

/// Command-line interface using clap.
///
/// - `fetch <url>` - Run the pipeline on a query URL
/// - `search` - Build the query from the configuration and run it
/// - `parse [path]` - Parse a saved response offline
pub mod cli;

/// Core domain model: the flat [`News`](domain::News) record.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for retrieving response bodies
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Background loading of one query.
pub mod loader;

/// Parsing the response envelope into records.
pub mod parser;

/// Search URL construction.
pub mod query;
