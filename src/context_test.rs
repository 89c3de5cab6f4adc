use super::*;
use crate::store::MemoryStore;
use crate::store::favorites::FavoriteRecord;

#[test]
fn favorites_use_configured_storage_key() {
    let config = WidgetConfig { storage_key: "custom".to_owned(), ..WidgetConfig::default() };
    let backend = Arc::new(MemoryStore::new());
    let ctx = WidgetContext::new(config, backend.clone());

    ctx.favorites.add(FavoriteRecord::new("1", "A", "One")).expect("add");
    assert!(backend.get("custom").expect("get").is_some());
    assert!(backend.get("favs").expect("get").is_none());
}

#[test]
fn clones_share_the_same_storage() {
    let ctx = WidgetContext::new(WidgetConfig::resolve(), Arc::new(MemoryStore::new()));
    let other = ctx.clone();
    ctx.favorites.add(FavoriteRecord::new("1", "A", "One")).expect("add");
    assert_eq!(other.favorites.load().expect("load").len(), 1);
}

#[test]
fn search_request_uses_context_config() {
    let ctx = WidgetContext::new(WidgetConfig::resolve(), Arc::new(MemoryStore::new()));
    let request = ctx.search_request("pizza", 7);
    assert!(request.callback_name().ends_with("_7"));
    assert_eq!(request.endpoint(), ctx.config.search.endpoint);
}
