// src/domain/listing.rs

/// One property card as shown on the listing page.
///
/// Visibility is deliberately absent: it is derived per query and lives in
/// [`crate::domain::filter::Evaluation`].
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    // Matching fields
    pub id: String,
    pub property_type: String,
    pub price: f64,
    pub location: String,

    // Display fields
    pub title: String,
    pub address: String,
    pub image_url: Option<String>,
    /// "sale" / "rent". Captured from the card, never filtered on.
    pub want_to: Option<String>,
}

#[cfg(test)]
impl Listing {
    /// Minimal constructor for the four matching fields; display fields are empty.
    pub fn new(
        id: impl Into<String>,
        property_type: impl Into<String>,
        price: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            property_type: property_type.into(),
            price,
            location: location.into(),
            title: String::new(),
            address: String::new(),
            image_url: None,
            want_to: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}
