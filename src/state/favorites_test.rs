use std::sync::Arc;

use super::*;
use crate::store::{KeyValueStore, MemoryStore};

fn memory_store() -> FavoritesStore {
    FavoritesStore::new(Arc::new(MemoryStore::new()), "favs")
}

#[test]
fn reload_from_empty_store_renders_nothing() {
    let store = memory_store();
    let mut view = FavoritesState::default();
    view.reload_from(&store);
    assert!(view.rows.is_empty());
    assert_eq!(view.renders, 0);
}

#[test]
fn add_favorite_reloads_rows_from_storage() {
    let store = memory_store();
    let mut view = FavoritesState::default();
    add_favorite(&store, &mut view, FavoriteRecord::new("42", "Restaurant", "Joe's Pizza")).expect("add");

    assert_eq!(view.rows, vec![FavoriteRecord::new("42", "Restaurant", "Joe's Pizza")]);
    assert_eq!(view.renders, 1);
}

#[test]
fn duplicate_add_leaves_view_untouched() {
    let store = memory_store();
    let mut view = FavoritesState::default();
    add_favorite(&store, &mut view, FavoriteRecord::new("1", "A", "One")).expect("add");
    let before = view.clone();

    let result = add_favorite(&store, &mut view, FavoriteRecord::new("1", "X", "Y"));
    assert!(matches!(result, Err(FavoritesError::AlreadyExists { .. })));
    assert_eq!(view, before);
}

#[test]
fn consecutive_reloads_produce_identical_rows() {
    let store = memory_store();
    store.add(FavoriteRecord::new("1", "A", "One")).expect("add");
    store.add(FavoriteRecord::new("2", "B", "Two")).expect("add");

    let mut view = FavoritesState::default();
    view.reload_from(&store);
    let first = view.rows.clone();
    view.reload_from(&store);

    assert_eq!(view.rows, first);
    assert_eq!(view.renders, 2);
}

#[test]
fn reload_picks_up_records_written_elsewhere() {
    let backend = Arc::new(MemoryStore::new());
    let store = FavoritesStore::new(backend.clone(), "favs");
    let mut view = FavoritesState::default();

    backend.set("favs", r#"[{"id":"9","category":"Museum","name":"Moma"}]"#).expect("seed");
    view.reload_from(&store);
    assert_eq!(view.rows, vec![FavoriteRecord::new("9", "Museum", "Moma")]);
}

#[test]
fn malformed_storage_keeps_previous_rows() {
    let backend = Arc::new(MemoryStore::new());
    let store = FavoritesStore::new(backend.clone(), "favs");
    let mut view = FavoritesState::default();
    store.add(FavoriteRecord::new("1", "A", "One")).expect("add");
    view.reload_from(&store);

    backend.set("favs", "not json").expect("corrupt");
    view.reload_from(&store);
    assert_eq!(view.rows, vec![FavoriteRecord::new("1", "A", "One")]);
    assert_eq!(view.renders, 1);
}
