//! Persisted favorites list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole list lives as one JSON array under a single storage key. Every
//! mutation is load → check → append → persist, and the favorites view is
//! always re-derived from what was persisted, never patched in place.
//!
//! ERROR HANDLING
//! ==============
//! Malformed stored data surfaces as [`FavoritesError::Malformed`] from
//! [`FavoritesStore::load`]. Readers that only render use
//! [`FavoritesStore::load_or_reset`], which logs and falls back to empty;
//! [`FavoritesStore::add`] does the same and then overwrites the bad value.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{KeyValueStore, StoreError};

/// One favorited (or favoritable) search result.
///
/// Decoding is lenient: numeric ids become strings, and a null or missing
/// `category`/`name` becomes empty text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(deserialize_with = "id_text")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub category: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
}

impl FavoriteRecord {
    pub fn new(id: impl Into<String>, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), category: category.into(), name: name.into() }
    }
}

fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("id must be a string or number, got {other}"))),
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Errors from favorites operations.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// A record with this id is already in the list.
    #[error("favorite {id} already exists")]
    AlreadyExists { id: String },

    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The stored value is not a JSON array of records.
    #[error("stored favorites are malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("favorites could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Ordered favorites with unique ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesCollection {
    records: Vec<FavoriteRecord>,
}

impl FavoritesCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan; favorites are curated by hand, one click at a time.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Append `record` unless its id is already present.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::AlreadyExists`] and leaves the list untouched
    /// when the id is taken.
    pub fn push_unique(&mut self, record: FavoriteRecord) -> Result<(), FavoritesError> {
        if self.contains_id(&record.id) {
            return Err(FavoritesError::AlreadyExists { id: record.id });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FavoriteRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FavoriteRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a FavoriteRecord;
    type IntoIter = std::slice::Iter<'a, FavoriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Favorites persisted under one key of a [`KeyValueStore`].
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").field("key", &self.key).finish_non_exhaustive()
    }
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Read the persisted list. An absent key is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the backend fails and
    /// [`FavoritesError::Malformed`] if the stored value does not decode.
    pub fn load(&self) -> Result<FavoritesCollection, FavoritesError> {
        match self.storage.get(&self.key)? {
            None => Ok(FavoritesCollection::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(FavoritesError::Malformed),
        }
    }

    /// Read the persisted list, logging any failure and treating it as empty.
    pub fn load_or_reset(&self) -> FavoritesCollection {
        match self.load() {
            Ok(collection) => collection,
            Err(FavoritesError::Storage(StoreError::Unsupported)) => FavoritesCollection::new(),
            Err(e) => {
                leptos::logging::warn!("favorites under '{}' unreadable, treating as empty: {e}", self.key);
                FavoritesCollection::new()
            }
        }
    }

    /// Write the full list under the key.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Encode`] or [`FavoritesError::Storage`] on failure.
    pub fn persist(&self, collection: &FavoritesCollection) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(collection).map_err(FavoritesError::Encode)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    /// Append `record` and persist, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::AlreadyExists`] without touching storage when
    /// the id is present, or a storage/encoding error if the write fails.
    pub fn add(&self, record: FavoriteRecord) -> Result<(), FavoritesError> {
        let mut collection = match self.load() {
            Ok(collection) => collection,
            Err(FavoritesError::Malformed(e)) => {
                leptos::logging::warn!("discarding malformed favorites under '{}': {e}", self.key);
                FavoritesCollection::new()
            }
            Err(e) => return Err(e),
        };
        collection.push_unique(record)?;
        self.persist(&collection)
    }
}
