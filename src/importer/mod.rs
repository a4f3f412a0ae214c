mod cards;
mod fetch;
mod import_error;

pub use cards::parse_listing_cards;
pub use fetch::load_page;
pub use import_error::ImportError;

use crate::db::{save_listings, Database};
use crate::errors::ServerError;

/// Loads a listing page from `source` (path or http(s) URL) and stores its cards.
pub fn import_listings(db: &Database, source: &str) -> Result<usize, ServerError> {
    let html = load_page(source)?;
    let listings = parse_listing_cards(&html)?;

    tracing::info!(source, cards = listings.len(), "parsed listing page");

    save_listings(db, &listings)
}
