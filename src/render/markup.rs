use crate::domain::Listing;
use crate::render::ListingView;
use crate::templates::components::{fallback_note, listing_card};
use maud::{html, Markup};

/// Builds the server-rendered `.property-list`.
#[derive(Default)]
pub struct MarkupView {
    cards: Vec<Markup>,
    fallback: bool,
}

impl MarkupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list followed by the fallback note, when one is shown.
    pub fn into_markup(self) -> Markup {
        html! {
            ul class="property-list" {
                @for card in &self.cards {
                    li { (card) }
                }
            }
            @if self.fallback {
                (fallback_note())
            }
        }
    }
}

impl ListingView for MarkupView {
    fn render(&mut self, listing: &Listing, visible: bool) {
        self.cards.push(listing_card(listing, visible));
    }

    fn show_fallback(&mut self) {
        self.fallback = true;
    }

    fn hide_fallback(&mut self) {
        self.fallback = false;
    }
}
