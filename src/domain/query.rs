// src/domain/query.rs

/// Property type value that disables the type criterion.
pub const ANY_PROPERTY_TYPE: &str = "any";

/// A single search request as submitted from the search bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// When non-empty after trimming, overrides every other field.
    pub by_id: Option<String>,
    pub property_type: Option<String>,
    /// Case-insensitive substring of the listing location.
    pub location: Option<String>,
    pub price_range: Option<PriceRange>,
    /// "want-to" form field. Captured for logging, ignored by the filter.
    pub want_to: Option<String>,
}

/// Which of the two mutually exclusive matching modes a query runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode<'a> {
    /// Exact match on the trimmed listing id.
    ById(&'a str),
    /// AND of every supplied attribute criterion.
    Attributes,
}

impl Query {
    pub fn mode(&self) -> SearchMode<'_> {
        match self.by_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => SearchMode::ById(id),
            _ => SearchMode::Attributes,
        }
    }

    /// The type criterion, or `None` when absent, empty or `"any"`.
    pub fn type_criterion(&self) -> Option<&str> {
        self.property_type
            .as_deref()
            .filter(|t| !t.is_empty() && *t != ANY_PROPERTY_TYPE)
    }

    /// The lower-cased location criterion, or `None` when blank.
    /// Surrounding whitespace is kept and takes part in the substring test.
    pub fn location_criterion(&self) -> Option<String> {
        self.location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
impl Query {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            by_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }
}

/// Inclusive price bounds. Unparsable input is kept as a criterion that
/// matches nothing rather than being dropped or raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceRange {
    Between { min: f64, max: f64 },
    Unparsable,
}

impl PriceRange {
    /// Parses `"min-max"`, the format of the `price-range` form field.
    /// Pieces after the second `-` are ignored.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split('-');
        match (parts.next(), parts.next()) {
            (Some(min), Some(max)) => Self::from_bounds(min, max),
            _ => PriceRange::Unparsable,
        }
    }

    /// Builds a range from two separately submitted components.
    /// An empty component counts as zero.
    pub fn from_bounds(min: &str, max: &str) -> Self {
        match (parse_bound(min), parse_bound(max)) {
            (Some(min), Some(max)) => PriceRange::Between { min, max },
            _ => PriceRange::Unparsable,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceRange::Between { min, max } => min <= price && price <= max,
            PriceRange::Unparsable => false,
        }
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
