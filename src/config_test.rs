use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = WidgetConfig::from_lookup(|_| None).expect("defaults parse");
    assert_eq!(config.storage_key, "favs");
    assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
    assert_eq!(config.search.client_tag, "joey");
    assert_eq!(config.search.result_type, "page");
    assert_eq!(config.search.transport, Transport::Jsonp);
    assert_eq!(config.search.timeout_ms, 10_000);
    assert!(config.search.access_token.is_empty());
    assert_eq!(config.element_ids, ElementIds::default());
}

#[test]
fn default_element_ids_match_page_regions() {
    let ids = ElementIds::default();
    assert_eq!(ids.search_box, "searchBox");
    assert_eq!(ids.results, "searchResults");
    assert_eq!(ids.result_count, "searchResultCount");
    assert_eq!(ids.favorites, "favoritesContainer");
}

#[test]
fn overrides_are_applied() {
    let config = WidgetConfig::from_lookup(lookup_from(&[
        ("FAVFINDER_SEARCH_ENDPOINT", "https://search.example.test/v1/"),
        ("FAVFINDER_ACCESS_TOKEN", "abc|123"),
        ("FAVFINDER_TRANSPORT", "fetch"),
        ("FAVFINDER_TIMEOUT_MS", " 2500 "),
        ("FAVFINDER_STORAGE_KEY", "my-favs"),
    ]))
    .expect("overrides parse");

    assert_eq!(config.search.endpoint, "https://search.example.test/v1");
    assert_eq!(config.search.access_token, "abc|123");
    assert_eq!(config.search.transport, Transport::Fetch);
    assert_eq!(config.search.timeout_ms, 2500);
    assert_eq!(config.storage_key, "my-favs");
}

#[test]
fn unknown_transport_is_rejected() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("FAVFINDER_TRANSPORT", "carrier-pigeon")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownTransport("carrier-pigeon".to_owned()));
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("FAVFINDER_TIMEOUT_MS", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "FAVFINDER_TIMEOUT_MS", value: "soon".to_owned() });
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("FAVFINDER_STORAGE_KEY", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "FAVFINDER_STORAGE_KEY" });
}

#[test]
fn resolve_never_fails() {
    let config = WidgetConfig::resolve();
    assert!(!config.storage_key.is_empty());
}

#[test]
fn default_matches_empty_lookup() {
    assert_eq!(WidgetConfig::default(), WidgetConfig::from_lookup(|_| None).expect("defaults parse"));
}
