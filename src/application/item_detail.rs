use crate::application::sequencer::{RequestSequencer, RequestTicket};
use crate::domain::chart::PriceSeries;
use crate::domain::errors::NetworkResult;
use crate::domain::item::{ItemId, PriceHistoryPoint};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub const HISTORY_ERROR_MESSAGE: &str = "Failed to fetch price history";
const FALLBACK_ITEM_NAME: &str = "Item";

/// The single branch the detail page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPresentation {
    Loading,
    Failed(String),
    Chart(PriceSeries),
    Empty,
}

/// Fetches the caller must start for a freshly opened item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLoad {
    pub item_id: ItemId,
    pub history: RequestTicket,
    pub name: RequestTicket,
}

/// State behind the item detail page.
#[derive(Debug, Clone)]
pub struct ItemDetailState {
    item_id: Option<ItemId>,
    loading: bool,
    error: Option<String>,
    history: Vec<PriceHistoryPoint>,
    item_name: String,
    history_requests: RequestSequencer,
    name_requests: RequestSequencer,
}

impl Default for ItemDetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemDetailState {
    /// Nothing fetched yet: the page starts out loading.
    pub fn new() -> Self {
        Self {
            item_id: None,
            loading: true,
            error: None,
            history: Vec::new(),
            item_name: String::new(),
            history_requests: RequestSequencer::new(),
            name_requests: RequestSequencer::new(),
        }
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &[PriceHistoryPoint] {
        &self.history
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Start loading `id`. Responses to earlier loads are dropped from here on.
    pub fn begin(&mut self, id: ItemId) -> DetailLoad {
        if self.item_id.as_ref() != Some(&id) {
            self.item_name.clear();
        }
        self.item_id = Some(id.clone());
        self.loading = true;
        self.error = None;
        self.history.clear();

        DetailLoad {
            item_id: id,
            history: self.history_requests.issue(),
            name: self.name_requests.issue(),
        }
    }

    pub fn apply_history(&mut self, ticket: RequestTicket, result: NetworkResult<Vec<PriceHistoryPoint>>) -> bool {
        if !self.history_requests.is_current(ticket) {
            log_debug!(LogComponent::Application("ItemDetail"), "Dropping stale price history response");
            return false;
        }

        match result {
            Ok(points) => {
                self.history = points;
                self.error = None;
            }
            Err(err) => {
                log_warn!(LogComponent::Application("ItemDetail"), "Price history fetch failed: {}", err);
                self.history.clear();
                self.error = Some(HISTORY_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Name lookups never surface errors; the heading falls back instead.
    pub fn apply_name(&mut self, ticket: RequestTicket, result: NetworkResult<Option<String>>) -> bool {
        if !self.name_requests.is_current(ticket) {
            return false;
        }

        match result {
            Ok(Some(name)) => self.item_name = name,
            Ok(None) => {}
            Err(err) => {
                log_debug!(LogComponent::Application("ItemDetail"), "Name lookup failed: {}", err);
            }
        }
        true
    }

    pub fn presentation(&self) -> DetailPresentation {
        if self.loading {
            DetailPresentation::Loading
        } else if let Some(message) = &self.error {
            DetailPresentation::Failed(message.clone())
        } else if self.history.is_empty() {
            DetailPresentation::Empty
        } else {
            DetailPresentation::Chart(PriceSeries::from_history(&self.history))
        }
    }

    pub fn heading(&self) -> String {
        let name = if self.item_name.is_empty() { FALLBACK_ITEM_NAME } else { &self.item_name };
        format!("{name} Price History")
    }
}
