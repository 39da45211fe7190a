//! Structured postal address

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured postal address
///
/// Every field is optional; adapters leave fields a vendor did not return
/// as `None`, never as empty-string placeholders, so serialized output
/// contains only what the vendor actually said.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// House number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    /// City or town
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Vendor-supplied single-line form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl Address {
    /// Human-readable single line
    ///
    /// Prefers the vendor-supplied formatted string; otherwise composes
    /// one from the populated structured fields.
    #[must_use]
    pub fn display_line(&self) -> String {
        if let Some(formatted) = &self.formatted {
            return formatted.clone();
        }

        let street_part = match (&self.street, &self.house_number) {
            (Some(street), Some(number)) => Some(format!("{street} {number}")),
            (Some(street), None) => Some(street.clone()),
            (None, _) => None,
        };
        let city_part = match (&self.postcode, &self.city) {
            (Some(postcode), Some(city)) => Some(format!("{postcode} {city}")),
            (None, Some(city)) => Some(city.clone()),
            (Some(postcode), None) => Some(postcode.clone()),
            (None, None) => None,
        };

        [street_part, city_part, self.state.clone(), self.country.clone()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Structured fields as query-parameter pairs, non-empty only
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(street) = &self.street {
            params.push(("street", street.clone()));
        }
        if let Some(number) = &self.house_number {
            params.push(("housenumber", number.clone()));
        }
        if let Some(city) = &self.city {
            params.push(("city", city.clone()));
        }
        if let Some(postcode) = &self.postcode {
            params.push(("postcode", postcode.clone()));
        }
        if let Some(state) = &self.state {
            params.push(("state", state.clone()));
        }
        if let Some(country) = &self.country {
            params.push(("country", country.clone()));
        }
        params
    }

    /// Whether enough of the address is present to be useful
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.formatted.is_some()
            || self.street.is_some()
            || self.city.is_some()
            || self.postcode.is_some()
            || self.country.is_some()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_line())
    }
}
