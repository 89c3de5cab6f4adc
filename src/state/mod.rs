//! View state for the widget's two regions.
//!
//! DESIGN
//! ======
//! Each region is a plain model wrapped in an `RwSignal` by the app, so the
//! transitions can be tested without a reactive runtime.

pub mod favorites;
pub mod search;
