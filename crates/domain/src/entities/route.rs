//! Route result record

use serde::{Deserialize, Serialize};

use crate::value_objects::DistanceUnit;

/// Distance and duration of a single route
///
/// Raw meters and seconds are the source of truth; kilometers and minutes
/// are always derived from them, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total travel time in seconds
    pub duration_seconds: f64,
}

impl RouteInfo {
    /// Create a route record from raw metric values
    #[must_use]
    pub const fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }

    /// Distance in kilometers, derived from meters
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Duration in minutes, derived from seconds
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }

    /// Distance converted to the requested display unit
    #[must_use]
    pub fn distance_in(&self, unit: DistanceUnit) -> f64 {
        unit.from_meters(self.distance_meters)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_derived_values() {
        let route = RouteInfo::new(5500.0, 432.0);
        assert!((route.distance_km() - 5.5).abs() < f64::EPSILON);
        assert!((route.duration_minutes() - 7.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_in_unit() {
        let route = RouteInfo::new(1609.344, 60.0);
        assert!((route.distance_in(DistanceUnit::Miles) - 1.0).abs() < 1e-9);
        assert!((route.distance_in(DistanceUnit::Meters) - 1609.344).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialization_round_trip() {
        let route = RouteInfo::new(1234.5, 678.9);
        let json = serde_json::to_string(&route).expect("serialize");
        let deserialized: RouteInfo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(route, deserialized);
    }

    proptest! {
        #[test]
        fn derived_follow_raw(meters in 0.0f64..1e8, seconds in 0.0f64..1e7) {
            let route = RouteInfo::new(meters, seconds);
            prop_assert!((route.distance_km() - meters / 1000.0).abs() < 1e-9);
            prop_assert!((route.duration_minutes() - seconds / 60.0).abs() < 1e-9);
        }
    }
}
