use crate::search_form::SearchForm;
use maud::{html, Markup};

const WANT_TO: &[(&str, &str)] = &[("sale", "Buy"), ("rent", "Rent")];

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("any", "Any type"),
    ("house", "House"),
    ("apartment", "Apartment"),
    ("villa", "Villa"),
    ("condo", "Condo"),
];

const PRICE_RANGES: &[(&str, &str)] = &[
    ("", "Any price"),
    ("0-100000", "Up to $100k"),
    ("100000-250000", "$100k - $250k"),
    ("250000-500000", "$250k - $500k"),
    ("500000-1000000", "$500k - $1M"),
];

/// The search form, pre-filled with the last submission.
pub fn search_bar(form: &SearchForm) -> Markup {
    let want_to = form.want_to.as_deref();
    let property_type = form.property_type.as_deref().or(Some("any"));
    let price_range = form.price_range.as_deref().unwrap_or("");

    html! {
        form class="search-bar" action="/search" method="get" {
            label for="want-to" class="sr-only" { "I want to" }
            select name="want-to" id="want-to" required {
                option value="" disabled selected[want_to.is_none()] { "I want to..." }
                @for (value, label) in WANT_TO {
                    option value=(value) selected[want_to == Some(*value)] { (label) }
                }
            }

            label for="property-type" class="sr-only" { "Property type" }
            select name="property-type" id="property-type" required {
                @for (value, label) in PROPERTY_TYPES {
                    option value=(value) selected[property_type == Some(*value)] { (label) }
                }
            }

            label for="location" class="sr-only" { "Location" }
            input
                type="text"
                name="location"
                id="location"
                placeholder="City or area"
                value=[form.location.as_deref()];

            label for="price-range" class="sr-only" { "Price range" }
            select name="price-range" id="price-range" {
                @for (value, label) in PRICE_RANGES {
                    option value=(value) selected[price_range == *value] { (label) }
                }
            }

            label for="property-id" class="sr-only" { "Property ID" }
            input
                type="text"
                name="property-id"
                id="property-id"
                placeholder="Property ID"
                value=[form.property_id.as_deref()];

            button type="submit" class="btn" { "Search" }
        }
    }
}
