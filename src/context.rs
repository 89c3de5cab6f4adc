//! Explicit widget context.
//!
//! Built once when the app mounts and provided to components through Leptos
//! context. Holds everything handlers need so no module keeps ambient state.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::net::search::SearchRequest;
use crate::store::favorites::FavoritesStore;
use crate::store::{BrowserStorage, KeyValueStore};

#[derive(Clone, Debug)]
pub struct WidgetContext {
    pub config: Arc<WidgetConfig>,
    pub favorites: FavoritesStore,
}

impl WidgetContext {
    pub fn new(config: WidgetConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let favorites = FavoritesStore::new(storage, config.storage_key.clone());
        Self { config: Arc::new(config), favorites }
    }

    /// Context backed by build-time config and `localStorage`.
    pub fn browser() -> Self {
        Self::new(WidgetConfig::resolve(), Arc::new(BrowserStorage))
    }

    /// Request for `query` under sequence number `seq`.
    #[must_use]
    pub fn search_request<'a>(&'a self, query: &'a str, seq: u64) -> SearchRequest<'a> {
        SearchRequest::new(&self.config.search, query, seq)
    }
}
