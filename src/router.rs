use crate::db::{load_listings, Database};
use crate::domain::evaluate;
use crate::errors::ServerError;
use crate::render::{apply, FallbackNote, JsonView, ListingView, MarkupView};
use crate::responses::{html_response, json_response, ResultResp};
use crate::search_form::{SearchForm, REQUIRED_FIELDS};
use crate::templates;
use astra::Request;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    match (method, path) {
        ("GET", "/") => home(db),
        ("GET", "/search") => search_page(db, query),
        ("GET", "/api/search") => search_api(db, query),
        _ => Err(ServerError::NotFound),
    }
}

/// Every listing shown, empty search bar.
fn home(db: &Database) -> ResultResp {
    let listings = load_listings(db)?;

    let mut view = MarkupView::new();
    for listing in &listings {
        view.render(listing, true);
    }

    html_response(templates::pages::listings_page(
        &SearchForm::default(),
        view.into_markup(),
    ))
}

fn search_page(db: &Database, query: &str) -> ResultResp {
    let form = parse_search(query)?;
    let listings = load_listings(db)?;
    let evaluation = evaluate(&listings, &form.to_query());

    let mut view = MarkupView::new();
    apply(&mut view, &mut FallbackNote::new(), &listings, &evaluation);

    html_response(templates::pages::listings_page(&form, view.into_markup()))
}

fn search_api(db: &Database, query: &str) -> ResultResp {
    let form = parse_search(query)?;
    let listings = load_listings(db)?;
    let evaluation = evaluate(&listings, &form.to_query());

    let mut view = JsonView::new();
    apply(&mut view, &mut FallbackNote::new(), &listings, &evaluation);

    json_response(&view.into_response())
}

fn parse_search(query: &str) -> Result<SearchForm, ServerError> {
    let form = SearchForm::from_urlencoded(query);
    form.validate(REQUIRED_FIELDS)?;

    tracing::debug!(
        want_to = form.want_to.as_deref(),
        property_type = form.property_type.as_deref(),
        location = form.location.as_deref(),
        property_id = form.property_id.as_deref(),
        price_range = form.price_range.as_deref(),
        "search submitted"
    );

    Ok(form)
}
