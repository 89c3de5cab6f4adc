//! Search results region state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests race: a slow response for an old query can land after a fast one
//! for the current query. Every request takes a sequence number from
//! [`SearchState::issue`], and [`SearchState::apply`] ignores anything not
//! newer than what is already on screen. Only rendered results move that
//! mark; a failed request never hides an older success that lands later.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::SearchOutcome;
use crate::store::favorites::FavoriteRecord;

/// Result of offering a response to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyStatus {
    /// Rows replaced and count updated.
    Rendered,
    /// A newer request already settled; the response was discarded.
    Stale,
    /// The response carried an error or no data; nothing was rendered and
    /// older requests may still render.
    Dropped,
}

/// Rows and count currently shown for the last settled search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub results: Vec<FavoriteRecord>,
    /// `None` until the first successful response.
    pub count: Option<usize>,
    issued: u64,
    settled: u64,
}

impl SearchState {
    /// Reserve the next sequence number for an outgoing request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Offer the outcome of request `seq` to the view.
    pub fn apply(&mut self, seq: u64, outcome: SearchOutcome) -> ApplyStatus {
        if seq <= self.settled {
            return ApplyStatus::Stale;
        }
        match outcome {
            SearchOutcome::Results(rows) => {
                self.settled = seq;
                self.count = Some(rows.len());
                self.results = rows;
                ApplyStatus::Rendered
            }
            SearchOutcome::Rejected(_) => ApplyStatus::Dropped,
        }
    }

    /// Text for the result-count display.
    #[must_use]
    pub fn count_label(&self) -> String {
        self.count.map(|n| n.to_string()).unwrap_or_default()
    }
}
