//! Widget configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget runs inside a browser with no process environment, so every
//! setting is captured with `option_env!` when the wasm bundle is compiled.
//! Parsing goes through a plain key lookup so tests can feed their own values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://graph.facebook.com/search";
pub const DEFAULT_CLIENT_TAG: &str = "joey";
pub const DEFAULT_RESULT_TYPE: &str = "page";
pub const DEFAULT_STORAGE_KEY: &str = "favs";
pub const DEFAULT_CALLBACK_PREFIX: &str = "favfinderSearch";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Errors produced while parsing build-time configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown FAVFINDER_TRANSPORT: {0} (expected 'jsonp' or 'fetch')")]
    UnknownTransport(String),

    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// How search requests leave the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    /// Script injection with a per-request callback.
    #[default]
    Jsonp,
    /// Plain CORS `GET`.
    Fetch,
}

/// Fixed identifiers of the four page regions the widget renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub search_box: String,
    pub results: String,
    pub result_count: String,
    pub favorites: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_box: "searchBox".to_owned(),
            results: "searchResults".to_owned(),
            result_count: "searchResultCount".to_owned(),
            favorites: "favoritesContainer".to_owned(),
        }
    }
}

/// Settings for the remote search endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint: String,
    pub access_token: String,
    pub client_tag: String,
    pub result_type: String,
    pub transport: Transport,
    pub callback_prefix: String,
    pub timeout_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_owned(),
            access_token: String::new(),
            client_tag: DEFAULT_CLIENT_TAG.to_owned(),
            result_type: DEFAULT_RESULT_TYPE.to_owned(),
            transport: Transport::Jsonp,
            callback_prefix: DEFAULT_CALLBACK_PREFIX.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Complete widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub search: SearchConfig,
    pub storage_key: String,
    pub element_ids: ElementIds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            element_ids: ElementIds::default(),
        }
    }
}

impl WidgetConfig {
    /// Build the configuration from `FAVFINDER_*` variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any captured value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Recognized keys:
    /// - `FAVFINDER_SEARCH_ENDPOINT`
    /// - `FAVFINDER_ACCESS_TOKEN`
    /// - `FAVFINDER_CLIENT_TAG`: default `joey`
    /// - `FAVFINDER_RESULT_TYPE`: default `page`
    /// - `FAVFINDER_STORAGE_KEY`: default `favs`
    /// - `FAVFINDER_TRANSPORT`: `jsonp` (default) or `fetch`
    /// - `FAVFINDER_CALLBACK_PREFIX`: default `favfinderSearch`
    /// - `FAVFINDER_TIMEOUT_MS`: default 10000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown transport, a non-numeric
    /// timeout, or an empty storage key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_key = lookup("FAVFINDER_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_owned());
        if storage_key.trim().is_empty() {
            return Err(ConfigError::Empty { var: "FAVFINDER_STORAGE_KEY" });
        }

        let search = SearchConfig {
            endpoint: lookup("FAVFINDER_SEARCH_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            access_token: lookup("FAVFINDER_ACCESS_TOKEN").unwrap_or_default(),
            client_tag: lookup("FAVFINDER_CLIENT_TAG").unwrap_or_else(|| DEFAULT_CLIENT_TAG.to_owned()),
            result_type: lookup("FAVFINDER_RESULT_TYPE").unwrap_or_else(|| DEFAULT_RESULT_TYPE.to_owned()),
            transport: parse_transport(lookup("FAVFINDER_TRANSPORT").as_deref())?,
            callback_prefix: lookup("FAVFINDER_CALLBACK_PREFIX").unwrap_or_else(|| DEFAULT_CALLBACK_PREFIX.to_owned()),
            timeout_ms: parse_u32("FAVFINDER_TIMEOUT_MS", lookup("FAVFINDER_TIMEOUT_MS"), DEFAULT_TIMEOUT_MS)?,
        };

        Ok(Self { search, storage_key, element_ids: ElementIds::default() })
    }

    /// Build-time configuration, or defaults with a logged warning if it is invalid.
    pub fn resolve() -> Self {
        let config = match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("favfinder config invalid, using defaults: {e}");
                Self::default()
            }
        };
        if config.search.access_token.is_empty() {
            leptos::logging::warn!("FAVFINDER_ACCESS_TOKEN not set; searches go out without a token");
        }
        config
    }
}

fn parse_transport(raw: Option<&str>) -> Result<Transport, ConfigError> {
    match raw.unwrap_or("jsonp") {
        "jsonp" => Ok(Transport::Jsonp),
        "fetch" => Ok(Transport::Fetch),
        other => Err(ConfigError::UnknownTransport(other.to_owned())),
    }
}

fn parse_u32(var: &'static str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "FAVFINDER_SEARCH_ENDPOINT" => option_env!("FAVFINDER_SEARCH_ENDPOINT"),
        "FAVFINDER_ACCESS_TOKEN" => option_env!("FAVFINDER_ACCESS_TOKEN"),
        "FAVFINDER_CLIENT_TAG" => option_env!("FAVFINDER_CLIENT_TAG"),
        "FAVFINDER_RESULT_TYPE" => option_env!("FAVFINDER_RESULT_TYPE"),
        "FAVFINDER_STORAGE_KEY" => option_env!("FAVFINDER_STORAGE_KEY"),
        "FAVFINDER_TRANSPORT" => option_env!("FAVFINDER_TRANSPORT"),
        "FAVFINDER_CALLBACK_PREFIX" => option_env!("FAVFINDER_CALLBACK_PREFIX"),
        "FAVFINDER_TIMEOUT_MS" => option_env!("FAVFINDER_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}
