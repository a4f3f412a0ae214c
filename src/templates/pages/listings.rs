// templates/pages/listings.rs

use crate::search_form::SearchForm;
use crate::templates::{components::search_bar, desktop_layout};
use maud::{html, Markup};

/// The listing page: search bar above the rendered `.property-list`.
pub fn listings_page(form: &SearchForm, results: Markup) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            section class="hero" {
                div class="container" {
                    h1 class="hero-title" { "Find your dream house" }
                    (search_bar(form))
                }
            }

            section class="section property" id="property" {
                div class="container" {
                    h2 class="section-title" { "Featured listings" }
                    (results)
                }
            }
        },
    )
}
