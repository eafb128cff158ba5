use url::Url;

use crate::app::Result;
use crate::config::QueryConfig;

/// Build the search URL for `config`. Optional filters are only added when set.
pub fn build_url(config: &QueryConfig) -> Result<Url> {
    let mut url = Url::parse(&config.endpoint)?;

    {
        let mut params = url.query_pairs_mut();
        if let Some(search) = config.search.as_deref().filter(|s| !s.is_empty()) {
            params.append_pair("q", search);
        }
        if let Some(section) = config.section.as_deref().filter(|s| !s.is_empty()) {
            params.append_pair("section", section);
        }
        params
            .append_pair("order-by", &config.order_by)
            .append_pair("page-size", &config.page_size.to_string())
            .append_pair("show-tags", &config.show_tags)
            .append_pair("api-key", &config.api_key);
    }

    Ok(url)
}
