use crate::domain::Listing;
use crate::render::{ListingView, FALLBACK_NOTE_TEXT};
use serde::Serialize;

/// Body of `GET /api/search`.
#[derive(Debug, Serialize, PartialEq)]
pub struct SearchResponse {
    pub visible_ids: Vec<String>,
    pub hidden_ids: Vec<String>,
    pub any_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_note: Option<&'static str>,
}

#[derive(Default)]
pub struct JsonView {
    visible_ids: Vec<String>,
    hidden_ids: Vec<String>,
    fallback: bool,
}

impl JsonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_response(self) -> SearchResponse {
        SearchResponse {
            any_visible: !self.visible_ids.is_empty(),
            visible_ids: self.visible_ids,
            hidden_ids: self.hidden_ids,
            fallback_note: self.fallback.then_some(FALLBACK_NOTE_TEXT),
        }
    }
}

impl ListingView for JsonView {
    fn render(&mut self, listing: &Listing, visible: bool) {
        if visible {
            self.visible_ids.push(listing.id.clone());
        } else {
            self.hidden_ids.push(listing.id.clone());
        }
    }

    fn show_fallback(&mut self) {
        self.fallback = true;
    }

    fn hide_fallback(&mut self) {
        self.fallback = false;
    }
}
