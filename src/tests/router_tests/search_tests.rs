use crate::errors::ServerError;
use crate::render::FALLBACK_NOTE_TEXT;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, seeded_test_db};

fn hidden_cards(body: &str) -> usize {
    body.matches("display: none").count()
}

#[test]
fn search_by_id_hides_other_cards() {
    let db = seeded_test_db("search_id");

    let resp = handle(
        get("/search?want-to=sale&property-type=any&property-id=+A1+"),
        &db,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("class=\"card\"").count(), 2);
    assert_eq!(hidden_cards(&body), 1);
    assert!(!body.contains(FALLBACK_NOTE_TEXT));
    // the submitted id is echoed back into the form
    assert!(body.contains("value=\" A1 \""));
}

#[test]
fn no_match_shows_a_single_fallback_note() {
    let db = seeded_test_db("search_none");

    let body = body_string(
        handle(get("/search?want-to=sale&property-type=condo"), &db).expect("Handler failed"),
    );

    assert_eq!(hidden_cards(&body), 2);
    assert_eq!(body.matches(FALLBACK_NOTE_TEXT).count(), 1);
    assert_eq!(body.matches("id=\"no-property-note\"").count(), 1);
}

#[test]
fn location_search_is_case_insensitive() {
    let db = seeded_test_db("search_location");

    let body = body_string(
        handle(
            get("/search?want-to=rent&property-type=any&location=dallas"),
            &db,
        )
        .expect("Handler failed"),
    );

    assert_eq!(hidden_cards(&body), 1);
    assert!(!body.contains(FALLBACK_NOTE_TEXT));
}

#[test]
fn missing_required_field_is_a_bad_request() {
    let db = seeded_test_db("search_invalid");

    let err = match handle(get("/search?property-type=house"), &db) {
        Err(err @ ServerError::BadRequest(_)) => err,
        Err(other) => panic!("expected BadRequest, got {other}"),
        Ok(_) => panic!("expected BadRequest, got a response"),
    };

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please fill in all required fields"));
}
