/// Number handed out for each issued request. Only the most recent one is
/// honoured when results come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket source implementing last-request-wins.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: u64,
    /// Set when the latest ticket was withdrawn without issuing a new one.
    withdrawn: bool,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        self.withdrawn = false;
        RequestTicket(self.issued)
    }

    /// Whether results carrying `ticket` may still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.withdrawn && ticket.0 == self.issued
    }

    /// Drop the latest ticket so no outstanding response is applied.
    pub fn invalidate(&mut self) {
        self.withdrawn = true;
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        (self.issued > 0 && !self.withdrawn).then_some(RequestTicket(self.issued))
    }
}
