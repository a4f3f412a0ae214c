//! Applies a filter [`Evaluation`] to something that can show listings.
//!
//! The filter never touches output; views implement [`ListingView`] and
//! [`apply`] drives them, keeping the fallback note unique.

mod json;
mod markup;

pub use json::{JsonView, SearchResponse};
pub use markup::MarkupView;

use crate::domain::{Evaluation, Listing};

pub const FALLBACK_NOTE_ID: &str = "no-property-note";
pub const FALLBACK_NOTE_TEXT: &str = "Sorry, we are out of the property you want";

/// Capabilities a listing display must offer.
pub trait ListingView {
    fn render(&mut self, listing: &Listing, visible: bool);
    fn show_fallback(&mut self);
    fn hide_fallback(&mut self);
}

/// Tracks whether the "no results" note is on screen so that showing or
/// hiding it twice never reaches the view twice.
#[derive(Debug, Default)]
pub struct FallbackNote {
    shown: bool,
}

impl FallbackNote {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn show<V: ListingView + ?Sized>(&mut self, view: &mut V) {
        if !self.shown {
            view.show_fallback();
            self.shown = true;
        }
    }

    pub fn hide<V: ListingView + ?Sized>(&mut self, view: &mut V) {
        if self.shown {
            view.hide_fallback();
            self.shown = false;
        }
    }
}

/// Pushes one evaluation into a view.
///
/// Any note left over from a previous search is removed first; a new one is
/// shown only when nothing is visible.
pub fn apply<V: ListingView + ?Sized>(
    view: &mut V,
    note: &mut FallbackNote,
    listings: &[Listing],
    evaluation: &Evaluation,
) {
    note.hide(view);

    for (index, listing) in listings.iter().enumerate() {
        view.render(listing, evaluation.is_visible(index));
    }

    if !evaluation.any_visible {
        note.show(view);
    }
}
