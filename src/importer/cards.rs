use crate::domain::Listing;
use crate::importer::ImportError;
use scraper::{ElementRef, Html, Selector};

struct CardSelectors {
    card: Selector,
    id: Selector,
    price: Selector,
    title: Selector,
    address: Selector,
    image: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self, ImportError> {
        let parse = |s: &str| {
            Selector::parse(s).map_err(|e| ImportError::HtmlParse(format!("{s}: {e:?}")))
        };

        Ok(Self {
            card: parse(".card")?,
            id: parse(".property-id")?,
            price: parse(".title-large")?,
            title: parse(".card-title")?,
            address: parse(".card-text")?,
            image: parse(".img-cover")?,
        })
    }
}

/// Extracts every `.card` on a listing page.
///
/// The id comes from the `.property-id` text, matching fields from the
/// `data-*` attributes. Cards without an id, a type or a usable price are
/// skipped with a warning.
pub fn parse_listing_cards(html: &str) -> Result<Vec<Listing>, ImportError> {
    let sel = CardSelectors::new()?;
    let doc = Html::parse_document(html);

    let mut listings = Vec::new();
    for (index, card) in doc.select(&sel.card).enumerate() {
        let Some(id) = text_of(card, &sel.id).filter(|s| !s.is_empty()) else {
            tracing::warn!(index, "skipping card without .property-id");
            continue;
        };

        let Some(property_type) = card.value().attr("data-property-type") else {
            tracing::warn!(index, id = %id, "skipping card without data-property-type");
            continue;
        };

        let price = card
            .value()
            .attr("data-price")
            .and_then(parse_price)
            .or_else(|| text_of(card, &sel.price).as_deref().and_then(parse_price));
        let Some(price) = price else {
            tracing::warn!(index, id = %id, "skipping card without a usable price");
            continue;
        };

        listings.push(Listing {
            property_type: property_type.to_string(),
            price,
            location: card.value().attr("data-location").unwrap_or("").to_string(),
            title: text_of(card, &sel.title).unwrap_or_default(),
            address: text_of(card, &sel.address).unwrap_or_default(),
            image_url: card
                .select(&sel.image)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string),
            want_to: card.value().attr("data-want-to").map(str::to_string),
            id,
        });
    }

    Ok(listings)
}

fn text_of(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Keeps only digits, `.` and `-` before parsing, so `"$1,200"` reads as 1200.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
