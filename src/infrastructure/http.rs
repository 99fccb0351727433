use crate::domain::{
    errors::{AppError, NetworkResult},
    item::{ItemId, ItemRepository, PriceHistoryPoint, SearchResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// HTTP client for the item backend
#[derive(Debug, Clone)]
pub struct HttpItemRepository {
    base_url: String,
}

impl Default for HttpItemRepository {
    /// Same-origin API.
    fn default() -> Self {
        Self::new("")
    }
}

impl HttpItemRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn history_url(&self, id: &ItemId) -> String {
        format!("{}/api/items/{}/history", self.base_url, urlencoding::encode(id.value()))
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/api/items/search?q={}", self.base_url, urlencoding::encode(query))
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> NetworkResult<Vec<T>> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {url}");

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request failed: {e:?}")))?;

        if !response.ok() {
            let err = AppError::http_status(response.status(), response.status_text());
            log_warn!(LogComponent::Infrastructure("HTTP"), "{url}: {err}");
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {e:?}")))?;

        let items = decode_list(&body)?;
        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET {url}: {} rows", items.len());
        Ok(items)
    }
}

impl ItemRepository for HttpItemRepository {
    async fn price_history(&self, id: &ItemId) -> NetworkResult<Vec<PriceHistoryPoint>> {
        self.get_list(&self.history_url(id)).await
    }

    async fn search(&self, query: &str) -> NetworkResult<Vec<SearchResult>> {
        self.get_list(&self.search_url(query)).await
    }
}

/// Decode a JSON array body. The backend sends `null` for an empty set.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> NetworkResult<Vec<T>> {
    let rows: Option<Vec<T>> = serde_json::from_str(body)?;
    Ok(rows.unwrap_or_default())
}
