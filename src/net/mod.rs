//! Networking for the remote search endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `search` builds requests and picks a transport, `jsonp` implements the
//! script-injection transport in the browser, and `types` defines the
//! response shapes accepted from the endpoint.

#[cfg(feature = "csr")]
mod jsonp;
pub mod search;
pub mod types;
