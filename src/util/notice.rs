//! Blocking user notices for favorites failures.
//!
//! Only two failures reach the user: a duplicate favorite and missing web
//! storage. Everything else is logged. Outside the browser the notice is
//! logged instead of shown.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::store::StoreError;
use crate::store::favorites::FavoritesError;

pub const DUPLICATE_FAVORITE_NOTICE: &str = "You have already added this page to your favorites!";
pub const STORAGE_UNSUPPORTED_NOTICE: &str =
    "Your browser doesnt support HTML 5 webstorage. Please use a modern browser";

/// The notice text for `err`, or `None` if the failure stays silent.
pub fn notice_for(err: &FavoritesError) -> Option<&'static str> {
    match err {
        FavoritesError::AlreadyExists { .. } => Some(DUPLICATE_FAVORITE_NOTICE),
        FavoritesError::Storage(StoreError::Unsupported) => Some(STORAGE_UNSUPPORTED_NOTICE),
        FavoritesError::Storage(_) | FavoritesError::Malformed(_) | FavoritesError::Encode(_) => None,
    }
}

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            leptos::logging::warn!("alert suppressed: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Surface a failed favorite operation: alert if user-visible, log otherwise.
pub fn report(err: &FavoritesError) {
    match notice_for(err) {
        Some(message) => alert(message),
        None => leptos::logging::warn!("favorite not saved: {err}"),
    }
}
