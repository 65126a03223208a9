//! Location module - one end of a route

use serde::{Deserialize, Serialize};

/// A city/country pair
///
/// Either part may be empty, meaning "not found". Values are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// City name
    pub city: String,

    /// Country name or code, as written in the text
    pub country: String,
}

impl Location {
    /// Create a location, trimming both parts
    pub fn new(city: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            city: city.as_ref().trim().to_string(),
            country: country.as_ref().trim().to_string(),
        }
    }

    /// A location with nothing found
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both city and country are present
    pub fn is_complete(&self) -> bool {
        !self.city.is_empty() && !self.country.is_empty()
    }

    /// Neither city nor country is present
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.country.is_empty()
    }
}
