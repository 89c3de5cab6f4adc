//! Wire types for the remote search endpoint.
//!
//! The endpoint answers either with an envelope `{ data: [...], error?: ... }`
//! or, from some proxies, a bare array. Both shapes are accepted here and
//! reduced to a [`SearchOutcome`] before anything reaches the view. Rows are
//! decoded one at a time; a row that cannot become a record is logged and
//! skipped without affecting its neighbours.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

use crate::store::favorites::FavoriteRecord;

/// Raw search payload as delivered by the endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    Bare(Vec<Value>),
    Envelope {
        #[serde(default)]
        data: Option<Vec<Value>>,
        #[serde(default)]
        error: Option<Value>,
    },
}

/// What the view should do with a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Replace the results region with these rows.
    Results(Vec<FavoriteRecord>),
    /// Render nothing. The reason is for logs only.
    Rejected(String),
}

impl SearchPayload {
    /// Decode a payload from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Decode`] if the value matches neither shape.
    pub fn from_value(value: Value) -> Result<Self, SearchError> {
        serde_json::from_value(value).map_err(SearchError::Decode)
    }

    /// Reduce the payload to an outcome. An error field wins over data.
    pub fn into_outcome(self) -> SearchOutcome {
        match self {
            Self::Bare(rows) => SearchOutcome::Results(decode_rows(rows)),
            Self::Envelope { error: Some(error), .. } if !error.is_null() => {
                SearchOutcome::Rejected(format!("endpoint error: {error}"))
            }
            Self::Envelope { data: Some(rows), .. } => SearchOutcome::Results(decode_rows(rows)),
            Self::Envelope { data: None, .. } => SearchOutcome::Rejected("response has no data".to_owned()),
        }
    }
}

fn decode_rows(rows: Vec<Value>) -> Vec<FavoriteRecord> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<FavoriteRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                leptos::logging::warn!("skipping search row: {e}");
                None
            }
        })
        .collect()
}

impl From<Result<SearchPayload, SearchError>> for SearchOutcome {
    fn from(result: Result<SearchPayload, SearchError>) -> Self {
        match result {
            Ok(payload) => payload.into_outcome(),
            Err(e) => Self::Rejected(e.to_string()),
        }
    }
}

/// Failures while issuing or decoding a search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Request construction or delivery failed.
    #[error("search transport failed: {0}")]
    Transport(String),

    #[error("search timed out after {0} ms")]
    Timeout(u32),

    #[error("search response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    /// No browser to issue the request from.
    #[error("search is not available outside the browser")]
    Unavailable,
}
