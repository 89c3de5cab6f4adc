//! Search request construction and dispatch.
//!
//! Browser (csr): requests go out over the configured [`Transport`].
//! Native builds: [`search`] resolves to [`SearchError::Unavailable`], which
//! keeps components and state testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::{SearchConfig, Transport};

use super::types::{SearchError, SearchPayload};

/// A single outbound search, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    config: &'a SearchConfig,
    query: &'a str,
    seq: u64,
}

impl<'a> SearchRequest<'a> {
    #[must_use]
    pub fn new(config: &'a SearchConfig, query: &'a str, seq: u64) -> Self {
        Self { config, query, seq }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        self.config.timeout_ms
    }

    /// Name of the window callback the JSONP payload invokes.
    ///
    /// Unique per request so overlapping requests never share a slot.
    #[must_use]
    pub fn callback_name(&self) -> String {
        format!("{}_{}", self.config.callback_prefix, self.seq)
    }

    /// Query parameters in the order the endpoint documents them.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("access_token", self.config.access_token.clone())];
        if self.config.transport == Transport::Jsonp {
            params.push(("callback", self.callback_name()));
        }
        params.extend([
            ("method", "get".to_owned()),
            ("pretty", "0".to_owned()),
            ("q", self.query.to_owned()),
            ("sdk", self.config.client_tag.clone()),
            ("type", self.config.result_type.clone()),
        ]);
        params
    }
}

/// A query is worth sending only if it has visible characters.
#[must_use]
pub fn is_searchable(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Issue `request` and wait for its payload.
///
/// # Errors
///
/// Returns a [`SearchError`] if the request cannot be delivered, times out,
/// or its payload matches no known shape.
pub async fn search(request: &SearchRequest<'_>) -> Result<SearchPayload, SearchError> {
    #[cfg(feature = "csr")]
    {
        let value = match request.config.transport {
            Transport::Jsonp => super::jsonp::request(request).await?,
            Transport::Fetch => fetch_json(request).await?,
        };
        SearchPayload::from_value(value)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(SearchError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn fetch_json(request: &SearchRequest<'_>) -> Result<serde_json::Value, SearchError> {
    use futures::FutureExt;

    let params = request.params();
    let send = gloo_net::http::Request::get(request.endpoint())
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(request.timeout_ms()).fuse();
    futures::pin_mut!(send, timeout);

    let resp = futures::select! {
        resp = send => resp.map_err(|e| SearchError::Transport(e.to_string()))?,
        () = timeout => return Err(SearchError::Timeout(request.timeout_ms())),
    };
    if !(200..300).contains(&resp.status()) {
        return Err(SearchError::Transport(format!("search request failed: {}", resp.status())));
    }
    resp.json::<serde_json::Value>().await.map_err(|e| SearchError::Transport(e.to_string()))
}
