use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// Parameters of the search request sent to the news API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Search endpoint
    pub endpoint: String,

    /// API key passed as the `api-key` parameter (default: "test")
    pub api_key: String,

    /// Restrict results to one section, e.g. "world"
    pub section: Option<String>,

    /// Free-text search terms
    pub search: Option<String>,

    /// Result ordering: "newest", "oldest" or "relevance" (default: "newest")
    pub order_by: String,

    /// Number of stories requested (default: 10)
    pub page_size: u32,

    /// Tag types attached to each story (default: "contributor")
    pub show_tags: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "test".to_string(),
            section: None,
            search: None,
            order_by: "newest".to_string(),
            page_size: 10,
            show_tags: "contributor".to_string(),
        }
    }
}
