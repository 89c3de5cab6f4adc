//! # favfinder
//!
//! Leptos + WASM widget that searches a remote social-graph endpoint and
//! keeps a list of favorite results in browser `localStorage`.
//!
//! The `store` module owns persistence, `net` talks to the search endpoint,
//! `state` holds the plain view models, and `components` renders them. With
//! the `csr` feature the crate exposes a `#[wasm_bindgen(start)]` entry point
//! that mounts [`app::App`] into the page body.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point: install console logging and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
