//! Distance unit value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance measurement unit for presentation
///
/// Internal computation and wire interchange are always metric
/// (meters/seconds); conversion happens at the display boundary via
/// [`DistanceUnit::from_meters`], never inside a canonical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Meters
    Meters,
    /// Kilometers
    Kilometers,
    /// Statute miles
    Miles,
}

const METERS_PER_MILE: f64 = 1609.344;

impl DistanceUnit {
    /// Convert a raw meter value into this unit
    #[must_use]
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            Self::Meters => meters,
            Self::Kilometers => meters / 1000.0,
            Self::Miles => meters / METERS_PER_MILE,
        }
    }

    /// Unit abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
