use strum::AsRefStr;

use crate::application::sequencer::{RequestSequencer, RequestTicket};
use crate::domain::errors::NetworkResult;
use crate::domain::item::SearchResult;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error};

/// Where the search widget currently is in its input/request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SearchPhase {
    /// Settled query is empty.
    #[default]
    Idle,
    /// Debounce timer running.
    Pending,
    /// Request in flight.
    Searching,
    ShowingResults,
    NoResults,
    Failed,
}

/// A search the caller must send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: RequestTicket,
    pub query: String,
}

/// What a debounce timeout resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    /// A newer keystroke superseded this timer.
    Ignored,
    /// The settled text did not change since the last settle.
    Unchanged,
    /// Empty query: results cleared without a network call.
    Cleared,
    Search(SearchRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Applied,
    Stale,
}

/// State of one search widget: query text, debounce bookkeeping, the
/// in-flight request and the dropdown.
#[derive(Debug, Clone, Default)]
pub struct SearchMachine {
    query: String,
    settled_query: String,
    results: Vec<SearchResult>,
    phase: SearchPhase,
    /// Phase to return to when a settle turns out to be a no-op.
    resting_phase: SearchPhase,
    dropdown_open: bool,
    debounce: RequestSequencer,
    requests: RequestSequencer,
}

impl SearchMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.dropdown_open
    }

    /// A request is in flight, even if newer keystrokes are still pending.
    pub fn is_searching(&self) -> bool {
        self.requests.latest().is_some()
    }

    /// The dropdown is only drawn while it is open and has rows.
    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_open && !self.results.is_empty()
    }

    /// Keystroke. Returns the debounce ticket the caller hands back to
    /// [`SearchMachine::settle`] once the quiet period elapses.
    pub fn input(&mut self, text: impl Into<String>) -> RequestTicket {
        self.query = text.into();
        self.dropdown_open = true;
        if self.phase != SearchPhase::Pending {
            self.resting_phase = self.phase;
        }
        self.phase = SearchPhase::Pending;
        self.debounce.issue()
    }

    /// Debounce timeout for `ticket`.
    pub fn settle(&mut self, ticket: RequestTicket) -> SettleOutcome {
        if !self.debounce.is_current(ticket) {
            return SettleOutcome::Ignored;
        }
        self.debounce.invalidate();

        if self.query == self.settled_query {
            self.phase = self.resting_phase;
            return SettleOutcome::Unchanged;
        }
        self.settled_query = self.query.clone();

        if self.query.is_empty() {
            self.results.clear();
            self.requests.invalidate();
            self.phase = SearchPhase::Idle;
            log_debug!(LogComponent::Application("Search"), "Query cleared");
            return SettleOutcome::Cleared;
        }

        self.phase = SearchPhase::Searching;
        let ticket = self.requests.issue();
        log_debug!(
            LogComponent::Application("Search"),
            "Searching for '{}' (request #{})",
            self.query,
            ticket.value()
        );
        SettleOutcome::Search(SearchRequest { ticket, query: self.query.clone() })
    }

    /// Response for the request identified by `ticket`.
    pub fn resolve(&mut self, ticket: RequestTicket, result: NetworkResult<Vec<SearchResult>>) -> ResolveOutcome {
        if !self.requests.is_current(ticket) {
            log_debug!(
                LogComponent::Application("Search"),
                "Dropping stale response for request #{}",
                ticket.value()
            );
            return ResolveOutcome::Stale;
        }
        self.requests.invalidate();

        let settled_phase = match result {
            Ok(results) => {
                let phase = if results.is_empty() { SearchPhase::NoResults } else { SearchPhase::ShowingResults };
                self.results = results;
                self.dropdown_open = true;
                phase
            }
            Err(err) => {
                log_error!(LogComponent::Application("Search"), "Error searching items: {}", err);
                self.results.clear();
                SearchPhase::Failed
            }
        };

        // a keystroke during the request keeps the widget pending
        if self.phase == SearchPhase::Searching {
            self.phase = settled_phase;
        } else {
            self.resting_phase = settled_phase;
        }
        ResolveOutcome::Applied
    }

    /// User picked a row. Closes the dropdown and returns the route to open.
    pub fn select(&mut self, result: &SearchResult) -> String {
        self.dropdown_open = false;
        result.item_id().detail_route()
    }

    /// Pointer pressed somewhere on the page.
    pub fn pointer_down(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.dismiss();
        }
    }

    pub fn dismiss(&mut self) {
        self.dropdown_open = false;
    }
}
