use crate::domain::Listing;
use crate::templates::components::format_price;
use maud::{html, Markup};

/// One `.card`. Hidden cards stay in the document with `display: none`
/// so the page script hooks (`.property-id`, `data-toggle-btn`) keep working.
pub fn listing_card(listing: &Listing, visible: bool) -> Markup {
    html! {
        div
            class="card"
            data-property-type=(listing.property_type)
            data-price=(listing.price)
            data-location=(listing.location)
            style=[(!visible).then_some("display: none")]
        {
            figure class="img-holder" {
                @if let Some(src) = &listing.image_url {
                    img src=(src) alt=(listing.title) class="img-cover";
                }
            }
            div class="card-content" {
                span class="property-id" title="Click to copy" { (listing.id) }
                data class="title-large" value=(listing.price) { (format_price(listing.price)) }
                h3 class="card-title" { (listing.title) }
                address class="card-text" { (listing.address) }
                button class="fav-btn" data-toggle-btn aria-label="Add to favorite" { "♡" }
            }
        }
    }
}
