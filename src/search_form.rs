// search_form.rs
use crate::domain::{PriceRange, Query};
use crate::errors::ServerError;

/// Fields the search bar marks `required`.
pub const REQUIRED_FIELDS: &[&str] = &["want-to", "property-type"];

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Raw values submitted from the search bar, keyed by their form names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub want_to: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    pub property_id: Option<String>,
    pub price_range: Option<String>,
}

impl SearchForm {
    /// Decodes an `application/x-www-form-urlencoded` string (a GET query).
    /// Unknown keys are ignored; for repeated keys the last value wins.
    pub fn from_urlencoded(input: &str) -> Self {
        let mut form = SearchForm::default();

        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            let slot = match &*key {
                "want-to" => &mut form.want_to,
                "property-type" => &mut form.property_type,
                "location" => &mut form.location,
                "property-id" => &mut form.property_id,
                "price-range" => &mut form.price_range,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }

        form
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "want-to" => self.want_to.as_deref(),
            "property-type" => self.property_type.as_deref(),
            "location" => self.location.as_deref(),
            "property-id" => self.property_id.as_deref(),
            "price-range" => self.price_range.as_deref(),
            _ => None,
        }
    }

    /// Names from `required` that are absent or blank.
    pub fn missing_fields<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| self.field(name).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Rejects the submission before any filtering happens.
    pub fn validate(&self, required: &[&str]) -> Result<(), ServerError> {
        let missing = self.missing_fields(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServerError::BadRequest(format!(
                "{MISSING_FIELDS_MESSAGE}: {}",
                missing.join(", ")
            )))
        }
    }

    /// An empty `price-range` (the "Any price" option) adds no criterion.
    pub fn to_query(&self) -> Query {
        Query {
            by_id: self.property_id.clone(),
            property_type: self.property_type.clone(),
            location: self.location.clone(),
            price_range: self
                .price_range
                .as_deref()
                .filter(|r| !r.trim().is_empty())
                .map(PriceRange::parse),
            want_to: self.want_to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchMode;

    #[test]
    fn decodes_form_fields() {
        let form = SearchForm::from_urlencoded(
            "want-to=rent&property-type=apartment&location=San+Antonio%2C+TX&property-id=&utm=x",
        );

        assert_eq!(form.want_to.as_deref(), Some("rent"));
        assert_eq!(form.property_type.as_deref(), Some("apartment"));
        assert_eq!(form.location.as_deref(), Some("San Antonio, TX"));
        assert_eq!(form.property_id.as_deref(), Some(""));
        assert_eq!(form.price_range, None);
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let form = SearchForm::from_urlencoded("want-to=+&property-type=any");

        assert_eq!(form.missing_fields(REQUIRED_FIELDS), vec!["want-to"]);
        match form.validate(REQUIRED_FIELDS) {
            Err(ServerError::BadRequest(msg)) => {
                assert!(msg.starts_with(MISSING_FIELDS_MESSAGE));
                assert!(msg.contains("want-to"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn complete_form_validates() {
        let form = SearchForm::from_urlencoded("want-to=sale&property-type=house");
        assert!(form.validate(REQUIRED_FIELDS).is_ok());
    }

    #[test]
    fn property_id_switches_to_id_mode() {
        let form = SearchForm::from_urlencoded("want-to=sale&property-type=house&property-id=+A1+");
        let query = form.to_query();

        assert_eq!(query.mode(), SearchMode::ById("A1"));
    }

    #[test]
    fn any_price_option_adds_no_range() {
        let form = SearchForm::from_urlencoded("want-to=sale&property-type=any&price-range=");
        assert_eq!(form.to_query().price_range, None);

        let form = SearchForm::from_urlencoded("want-to=sale&property-type=any&price-range=x-y");
        assert_eq!(form.to_query().price_range, Some(PriceRange::Unparsable));
    }
}
