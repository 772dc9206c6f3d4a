use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::item::{DataReport, ItemPage, ItemQuery, ResponseReport},
};
use async_trait::async_trait;

/// Trait that holds the methods for item endpoints.
#[async_trait]
pub trait ItemsApi {
    /// Fetch a page of the caller's lost-item reports. Lost items are
    /// private, so a query without `user_email` yields an empty page.
    async fn lost_items(&self, query: Option<ItemQuery>) -> Result<ItemPage, LostFoundError>;

    /// Fetch a page of the public found-item listing.
    async fn found_items(&self, query: Option<ItemQuery>) -> Result<ItemPage, LostFoundError>;

    /// Submit a lost or found report.
    async fn report_item(&self, report: DataReport) -> Result<ResponseReport, LostFoundError>;
}

#[async_trait]
impl ItemsApi for LostFoundClient {
    async fn lost_items(&self, query: Option<ItemQuery>) -> Result<ItemPage, LostFoundError> {
        let url = listing_url(&self.config.items.lost, query);
        let resp = self.authed_get(&url).await?;
        parse_json_if_ok(resp).await
    }

    async fn found_items(&self, query: Option<ItemQuery>) -> Result<ItemPage, LostFoundError> {
        let url = listing_url(&self.config.items.found, query);
        let resp = self.authed_get(&url).await?;
        parse_json_if_ok(resp).await
    }

    async fn report_item(&self, report: DataReport) -> Result<ResponseReport, LostFoundError> {
        let resp = self.authed_post(&self.config.items.report, &report).await?;
        parse_json_if_ok(resp).await
    }
}

fn listing_url(endpoint: &str, query: Option<ItemQuery>) -> String {
    let mut url = endpoint.to_string();

    let query_string = if let Some(q) = query {
        serde_urlencoded::to_string(q).unwrap_or_default()
    } else {
        String::new()
    };
    if !query_string.is_empty() {
        url.push('?');
        url.push_str(&query_string);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_appends_the_query() {
        let query = ItemQuery {
            page: Some(2),
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(
            listing_url("http://localhost:5000/api/found-items", Some(query)),
            "http://localhost:5000/api/found-items?page=2&limit=50"
        );
    }

    #[test]
    fn listing_url_without_query_is_the_bare_endpoint() {
        assert_eq!(
            listing_url("http://localhost:5000/api/found-items", None),
            "http://localhost:5000/api/found-items"
        );
        assert_eq!(
            listing_url(
                "http://localhost:5000/api/found-items",
                Some(ItemQuery::default())
            ),
            "http://localhost:5000/api/found-items"
        );
    }
}
