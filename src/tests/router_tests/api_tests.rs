use crate::router::handle;
use crate::tests::utils::{body_string, get, seeded_test_db};
use serde_json::Value;

fn search_json(name: &str, uri: &str) -> Value {
    let db = seeded_test_db(name);
    let resp = handle(get(uri), &db).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn price_range_filters_listings() {
    let json = search_json(
        "api_price",
        "/api/search?want-to=sale&property-type=any&price-range=100000-180000",
    );

    assert_eq!(json["visible_ids"], serde_json::json!(["A2"]));
    assert_eq!(json["hidden_ids"], serde_json::json!(["A1"]));
    assert_eq!(json["any_visible"], true);
    assert!(json.get("fallback_note").is_none());
}

#[test]
fn malformed_price_range_matches_nothing() {
    let json = search_json(
        "api_bad_price",
        "/api/search?want-to=sale&property-type=any&price-range=x-y",
    );

    assert_eq!(json["visible_ids"], serde_json::json!([]));
    assert_eq!(json["any_visible"], false);
    assert!(json["fallback_note"].is_string());
}

#[test]
fn id_search_ignores_other_fields() {
    let json = search_json(
        "api_id",
        "/api/search?want-to=sale&property-type=apartment&location=Dallas&property-id=A1",
    );

    assert_eq!(json["visible_ids"], serde_json::json!(["A1"]));
}
