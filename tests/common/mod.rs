#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use item_price_tracker::domain::errors::{AppError, NetworkResult};
use item_price_tracker::domain::item::{ItemId, ItemRepository, PriceHistoryPoint, SearchResult};

/// Canned backend that counts the calls it receives.
#[derive(Default)]
pub struct InMemoryItems {
    pub search_responses: HashMap<String, Vec<SearchResult>>,
    pub histories: HashMap<String, NetworkResult<Vec<PriceHistoryPoint>>>,
    pub failing_search: bool,
    pub search_calls: Cell<usize>,
    pub searched: RefCell<Vec<String>>,
}

impl InMemoryItems {
    pub fn with_search(mut self, query: &str, results: Vec<SearchResult>) -> Self {
        self.search_responses.insert(query.to_string(), results);
        self
    }

    pub fn with_history(mut self, id: &str, history: NetworkResult<Vec<PriceHistoryPoint>>) -> Self {
        self.histories.insert(id.to_string(), history);
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing_search = true;
        self
    }
}

impl ItemRepository for InMemoryItems {
    async fn price_history(&self, id: &ItemId) -> NetworkResult<Vec<PriceHistoryPoint>> {
        self.histories
            .get(id.value())
            .cloned()
            .unwrap_or_else(|| Err(AppError::http_status(404, "Not Found")))
    }

    async fn search(&self, query: &str) -> NetworkResult<Vec<SearchResult>> {
        self.search_calls.set(self.search_calls.get() + 1);
        self.searched.borrow_mut().push(query.to_string());
        if self.failing_search {
            return Err(AppError::Network("connection refused".into()));
        }
        Ok(self.search_responses.get(query).cloned().unwrap_or_default())
    }
}

pub fn team_captain() -> SearchResult {
    SearchResult::new(5, "Team Captain", 6)
}

pub fn sample_history() -> Vec<PriceHistoryPoint> {
    vec![
        PriceHistoryPoint::new(12.33, 1_700_000_000),
        PriceHistoryPoint::new(12.66, 1_700_086_400),
        PriceHistoryPoint::new(13.0, 1_700_172_800),
    ]
}
