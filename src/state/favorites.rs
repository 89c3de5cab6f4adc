//! Favorites region state and the add/reload cycle.
//!
//! The rows shown are always a fresh copy of what storage holds. Adding a
//! favorite never touches `rows` directly; it persists first and then reloads.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::store::favorites::{FavoriteRecord, FavoritesError, FavoritesStore};

/// Rows currently rendered in the favorites container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub rows: Vec<FavoriteRecord>,
    /// Number of reloads that replaced `rows`; the container scrolls on each.
    pub renders: u64,
}

impl FavoritesState {
    /// Re-derive the rows from storage.
    ///
    /// An empty or unreadable store leaves the current rows in place.
    pub fn reload_from(&mut self, store: &FavoritesStore) {
        let collection = store.load_or_reset();
        if collection.is_empty() {
            return;
        }
        self.rows = collection.into_vec();
        self.renders += 1;
    }
}

/// Persist `record` as a favorite, then reload the favorites rows.
///
/// # Errors
///
/// Returns the store's [`FavoritesError`]; `view` is left untouched on error.
pub fn add_favorite(
    store: &FavoritesStore,
    view: &mut FavoritesState,
    record: FavoriteRecord,
) -> Result<(), FavoritesError> {
    store.add(record)?;
    view.reload_from(store);
    Ok(())
}
