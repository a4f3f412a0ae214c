use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, seeded_test_db};

#[test]
fn home_page_lists_every_listing() {
    let db = seeded_test_db("home_all");

    let resp = handle(get("/"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Modern family house"));
    assert!(body.contains("Downtown apartment"));
    assert!(body.contains("$200,000.00"));
    assert!(body.contains("class=\"search-bar\""));
    assert!(!body.contains("display: none"));
    assert!(!body.contains("no-property-note"));
}

#[test]
fn pages_only_reference_served_routes() {
    let db = seeded_test_db("home_assets");

    let body = body_string(handle(get("/"), &db).expect("Handler failed"));
    assert!(!body.contains("/static/"));
}

#[test]
fn empty_catalog_has_no_fallback_note_on_home() {
    let db = init_test_db("home_empty");

    let body = body_string(handle(get("/"), &db).expect("Handler failed"));
    assert!(!body.contains("no-property-note"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db("home_404");

    assert!(matches!(
        handle(get("/listings/A1"), &db),
        Err(crate::errors::ServerError::NotFound)
    ));
}
