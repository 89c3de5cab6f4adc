use super::*;

#[test]
fn duplicate_favorite_has_notice() {
    let err = FavoritesError::AlreadyExists { id: "1".to_owned() };
    assert_eq!(notice_for(&err), Some(DUPLICATE_FAVORITE_NOTICE));
}

#[test]
fn unsupported_storage_has_notice() {
    let err = FavoritesError::Storage(StoreError::Unsupported);
    assert_eq!(notice_for(&err), Some(STORAGE_UNSUPPORTED_NOTICE));
}

#[test]
fn write_failures_stay_silent() {
    let err = FavoritesError::Storage(StoreError::Write("quota".to_owned()));
    assert_eq!(notice_for(&err), None);
}

#[test]
fn malformed_storage_stays_silent() {
    let err = FavoritesError::Malformed(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
    assert_eq!(notice_for(&err), None);
}

#[test]
fn report_is_callable_off_browser() {
    report(&FavoritesError::AlreadyExists { id: "1".to_owned() });
    report(&FavoritesError::Storage(StoreError::Read("denied".to_owned())));
}
