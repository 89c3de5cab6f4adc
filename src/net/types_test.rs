use super::*;

fn decode(raw: &str) -> SearchPayload {
    SearchPayload::from_value(serde_json::from_str(raw).expect("json")).expect("payload")
}

#[test]
fn envelope_with_data_yields_results() {
    let outcome = decode(r#"{"data":[{"id":"1","category":"Bar","name":"Moe's"}]}"#).into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(vec![FavoriteRecord::new("1", "Bar", "Moe's")]));
}

#[test]
fn empty_data_with_null_error_yields_empty_results() {
    let outcome = decode(r#"{"data":[],"error":null}"#).into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(Vec::new()));
}

#[test]
fn error_field_rejects_even_with_data() {
    let outcome = decode(r#"{"data":[{"id":"1"}],"error":{"message":"bad token","code":190}}"#).into_outcome();
    assert!(matches!(outcome, SearchOutcome::Rejected(reason) if reason.contains("bad token")));
}

#[test]
fn envelope_without_data_is_rejected() {
    let outcome = decode("{}").into_outcome();
    assert!(matches!(outcome, SearchOutcome::Rejected(_)));
}

#[test]
fn bare_array_yields_results() {
    let outcome = decode(r#"[{"id":"5","category":"Park","name":"Green"}]"#).into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(vec![FavoriteRecord::new("5", "Park", "Green")]));
}

#[test]
fn null_category_renders_as_empty_text() {
    let value = serde_json::json!({
        "data": [
            { "id": "1", "category": "Bar", "name": "Moe's" },
            { "id": "2", "category": null, "name": "No category" },
        ]
    });
    let outcome = SearchPayload::from_value(value).expect("payload").into_outcome();
    assert_eq!(
        outcome,
        SearchOutcome::Results(vec![FavoriteRecord::new("1", "Bar", "Moe's"), FavoriteRecord::new("2", "", "No category")])
    );
}

#[test]
fn numeric_id_becomes_text() {
    let value = serde_json::json!({ "data": [{ "id": 123, "category": "Cafe", "name": null }] });
    let outcome = SearchPayload::from_value(value).expect("payload").into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(vec![FavoriteRecord::new("123", "Cafe", "")]));
}

#[test]
fn row_without_id_is_skipped_and_neighbours_kept() {
    let value = serde_json::json!({
        "data": [
            { "name": "no id" },
            { "id": "9", "category": "Park", "name": "Green" },
            { "id": { "nested": true }, "name": "odd id" },
        ]
    });
    let outcome = SearchPayload::from_value(value).expect("payload").into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(vec![FavoriteRecord::new("9", "Park", "Green")]));
}

#[test]
fn non_text_names_are_stringified() {
    let outcome = decode(r#"[{"id":"4","category":7,"name":true}]"#).into_outcome();
    assert_eq!(outcome, SearchOutcome::Results(vec![FavoriteRecord::new("4", "7", "true")]));
}

#[test]
fn null_payload_fails_to_decode() {
    assert!(SearchPayload::from_value(serde_json::Value::Null).is_err());
}

#[test]
fn transport_error_becomes_rejected_outcome() {
    let outcome = SearchOutcome::from(Err::<SearchPayload, _>(SearchError::Timeout(500)));
    assert_eq!(outcome, SearchOutcome::Rejected("search timed out after 500 ms".to_owned()));
}
