//! Durable key-value storage for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `favorites` owns the persisted record list; this module only provides the
//! string-keyed backends it writes through. `BrowserStorage` resolves
//! `window.localStorage` on every call, so it holds no JS handles and can be
//! shared freely. `MemoryStore` keeps values in process and backs the tests.


pub mod favorites;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Failures of the underlying storage backend.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The host environment has no usable web storage.
    #[error("web storage is not supported in this environment")]
    Unsupported,

    #[error("storage read failed: {0}")]
    Read(String),

    /// Typically a quota or privacy-mode rejection.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string-keyed, string-valued store with synchronous access.
pub trait KeyValueStore: Send + Sync {
    /// Return the value under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend is unavailable or the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`. Outside the browser every call reports
/// [`StoreError::Unsupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or(None))
        .ok_or(StoreError::Unsupported)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StoreError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unsupported)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unsupported)
        }
    }
}
