use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single flattened news entry: one story paired with one of its
/// contributor tags.
///
/// Every field is always populated. Values missing from the source payload
/// hold the placeholder produced by [`missing_field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub section_name: String,
    /// Publication timestamp exactly as received.
    pub web_publication_date: String,
    pub web_title: String,
    pub contributor: String,
    pub web_url: String,
}

impl News {
    pub fn new(
        section_name: impl Into<String>,
        web_publication_date: impl Into<String>,
        web_title: impl Into<String>,
        contributor: impl Into<String>,
        web_url: impl Into<String>,
    ) -> Self {
        Self {
            section_name: section_name.into(),
            web_publication_date: web_publication_date.into(),
            web_title: web_title.into(),
            contributor: contributor.into(),
            web_url: web_url.into(),
        }
    }

    /// The publication date, if it is a valid RFC 3339 timestamp.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.web_publication_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Date for list display, falling back to the raw text.
    pub fn display_date(&self) -> String {
        self.published_at()
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.web_publication_date.clone())
    }
}

/// Placeholder text for a key absent from the payload, e.g. `No webUrl!`.
pub fn missing_field(key: &str) -> String {
    format!("No {}!", key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> News {
        News::new(
            "World",
            "2020-01-01T00:00:00Z",
            "Headline",
            "Jane Doe",
            "http://example.com/a",
        )
    }

    #[test]
    fn test_missing_field_text() {
        assert_eq!(missing_field("sectionName"), "No sectionName!");
        assert_eq!(missing_field("webTitle"), "No webTitle!");
    }

    #[test]
    fn test_records_compare_by_value() {
        assert_eq!(sample(), sample());

        let mut other = sample();
        other.contributor = "John Roe".into();
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_published_at_parses_rfc3339() {
        let published = sample().published_at().unwrap();
        assert_eq!(published.to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_display_date_formats_valid_timestamp() {
        let mut news = sample();
        news.web_publication_date = "2021-03-04T05:06:07+01:00".into();
        assert_eq!(news.display_date(), "2021-03-04 04:06");
    }

    #[test]
    fn test_display_date_keeps_unparseable_text() {
        let mut news = sample();
        news.web_publication_date = missing_field("webPublicationDate");
        assert!(news.published_at().is_none());
        assert_eq!(news.display_date(), "No webPublicationDate!");
    }
}
