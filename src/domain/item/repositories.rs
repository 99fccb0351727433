use crate::domain::errors::NetworkResult;

use super::{ItemId, PriceHistoryPoint, SearchResult};

/// Read-only access to the item backend.
///
/// Name lookup and free-text search hit the same endpoint on the server, but
/// they are different questions and are kept apart here.
#[allow(async_fn_in_trait)]
pub trait ItemRepository {
    /// Full price history of one item, oldest first as served.
    async fn price_history(&self, id: &ItemId) -> NetworkResult<Vec<PriceHistoryPoint>>;

    /// Free-text search over item names.
    async fn search(&self, query: &str) -> NetworkResult<Vec<SearchResult>>;

    /// Display name of an item, if the backend knows one.
    async fn lookup_name(&self, id: &ItemId) -> NetworkResult<Option<String>> {
        let results = self.search(id.value()).await?;
        Ok(results.into_iter().next().map(|result| result.name))
    }
}
