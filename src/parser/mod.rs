//! Flattening of the news API JSON envelope into [`News`] records.
//!
//! The expected payload is
//!
//! ```text
//! { "response": { "results": [ { ..., "tags": [ { ... }, ... ] }, ... ] } }
//! ```
//!
//! Each story yields one record per tag, in story-major, tag-minor order.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::app::{NewsError, Result};
use crate::domain::{missing_field, News};

const SECTION_NAME: &str = "sectionName";
const WEB_PUBLICATION_DATE: &str = "webPublicationDate";
const WEB_TITLE: &str = "webTitle";
const WEB_URL: &str = "webUrl";

/// Outcome of looking up one key on a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// The key holds a JSON string.
    Text(String),
    /// The key is present but not a string; holds the JSON rendering of the value.
    NonText(String),
    Missing,
}

impl Field {
    pub fn lookup(object: &Map<String, Value>, key: &str) -> Self {
        match object.get(key) {
            Some(Value::String(s)) => Field::Text(s.clone()),
            Some(other) => Field::NonText(other.to_string()),
            None => Field::Missing,
        }
    }

    pub fn into_string(self, key: &str) -> String {
        match self {
            Field::Text(s) | Field::NonText(s) => s,
            Field::Missing => missing_field(key),
        }
    }
}

fn extract(object: &Map<String, Value>, key: &str) -> String {
    Field::lookup(object, key).into_string(key)
}

/// Parse a raw response body.
///
/// Returns `None` when there is no input at all (`None` or `""`). Input that
/// is present but cannot be walked yields `Some` of an empty list; the cause is
/// logged.
pub fn parse(raw: Option<&str>) -> Option<Vec<News>> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return None,
    };

    match try_parse(raw) {
        Ok(news) => Some(news),
        Err(e) => {
            warn!("Problem parsing the JSON results: {}", e);
            Some(Vec::new())
        }
    }
}

/// Parse a raw response body, reporting why it could not be walked.
pub fn try_parse(raw: &str) -> Result<Vec<News>> {
    let root: Value = serde_json::from_str(raw)?;

    let response = object_at(&root, "response")?;
    let results = array_at(response, "results", "response.results")?;

    let mut news = Vec::new();

    for (i, story) in results.iter().enumerate() {
        let story = story
            .as_object()
            .ok_or_else(|| structure(format!("results[{}] is not an object", i)))?;

        let section_name = extract(story, SECTION_NAME);
        let web_publication_date = extract(story, WEB_PUBLICATION_DATE);
        let web_title = extract(story, WEB_TITLE);

        let tags = array_at(story, "tags", &format!("results[{}].tags", i))?;

        for (j, tag) in tags.iter().enumerate() {
            let tag = tag.as_object().ok_or_else(|| {
                structure(format!("results[{}].tags[{}] is not an object", i, j))
            })?;

            news.push(News {
                section_name: section_name.clone(),
                web_publication_date: web_publication_date.clone(),
                web_title: web_title.clone(),
                contributor: extract(tag, WEB_TITLE),
                web_url: extract(tag, WEB_URL),
            });
        }
    }

    debug!("Parsed {} records from {} stories", news.len(), results.len());
    Ok(news)
}

fn object_at<'a>(value: &'a Value, key: &str) -> Result<&'a Map<String, Value>> {
    let object = value
        .as_object()
        .ok_or_else(|| structure("top level is not an object".into()))?;

    match object.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(structure(format!("`{}` is not an object", key))),
        None => Err(structure(format!("no value for `{}`", key))),
    }
}

fn array_at<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>> {
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(structure(format!("`{}` is not an array", path))),
        None => Err(structure(format!("no value for `{}`", path))),
    }
}

fn structure(message: String) -> NewsError {
    NewsError::Structure(message)
}
