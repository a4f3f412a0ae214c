// src/domain/filter.rs

use crate::domain::listing::Listing;
use crate::domain::query::{Query, SearchMode};

/// Outcome of running one query over a listing collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One entry per input listing, in input order.
    pub visibility: Vec<bool>,
    pub any_visible: bool,
}

impl Evaluation {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|v| **v).count()
    }
}

/// Decides which listings a query shows.
///
/// In id mode only the trimmed id is compared. Otherwise every supplied
/// criterion must hold (type, location substring, price range). Never fails:
/// malformed price input yields a range that matches nothing.
pub fn evaluate(listings: &[Listing], query: &Query) -> Evaluation {
    let visibility: Vec<bool> = match query.mode() {
        SearchMode::ById(id) => listings.iter().map(|l| l.id.trim() == id).collect(),
        SearchMode::Attributes => {
            let property_type = query.type_criterion();
            let location = query.location_criterion();

            listings
                .iter()
                .map(|listing| {
                    let mut visible = true;

                    if let Some(t) = property_type {
                        visible &= listing.property_type == t;
                    }
                    if let Some(loc) = &location {
                        visible &= listing.location.to_lowercase().contains(loc.as_str());
                    }
                    if let Some(range) = &query.price_range {
                        visible &= range.contains(listing.price);
                    }

                    visible
                })
                .collect()
        }
    };

    let any_visible = visibility.iter().any(|v| *v);

    Evaluation {
        visibility,
        any_visible,
    }
}
