//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel mode for routing and distance calculations
///
/// A closed set. Each adapter owns the mapping from these modes to its
/// vendor-specific tokens and must reject, with a validation error, any
/// mode the vendor does not support rather than substituting another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Car routing
    Driving,
    /// Pedestrian routing
    Walking,
    /// Bicycle routing
    Cycling,
    /// Heavy goods vehicle routing
    Truck,
}

impl TravelMode {
    /// All modes, in canonical order
    pub const ALL: [Self; 4] = [Self::Driving, Self::Walking, Self::Cycling, Self::Truck];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TravelMode::Driving.to_string(), "driving");
        assert_eq!(TravelMode::Truck.to_string(), "truck");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TravelMode::Cycling).expect("serialize");
        assert_eq!(json, "\"cycling\"");
        let mode: TravelMode = serde_json::from_str("\"walking\"").expect("deserialize");
        assert_eq!(mode, TravelMode::Walking);
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(TravelMode::ALL.len(), 4);
    }
}
