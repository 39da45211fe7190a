//! Geocoding and autocomplete result records

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::value_objects::Coordinate;
use crate::entities::Address;

/// Error type for confidence scores outside [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid confidence score {0}: must be within 0.0 to 1.0")]
pub struct InvalidConfidence(pub f64);

/// Coarse precision classification derived from a confidence score
///
/// Thresholds are fixed constants: `>= 0.9` building, `>= 0.7` street,
/// `>= 0.4` city, anything lower region. Higher confidence never yields
/// a coarser tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Match is precise to an individual building
    Building,
    /// Match is precise to a street
    Street,
    /// Match is precise to a city or town
    City,
    /// Match is only precise to a wider region
    Region,
}

impl ConfidenceTier {
    /// Score at or above which a match counts as building-level
    pub const BUILDING_THRESHOLD: f64 = 0.9;
    /// Score at or above which a match counts as street-level
    pub const STREET_THRESHOLD: f64 = 0.7;
    /// Score at or above which a match counts as city-level
    pub const CITY_THRESHOLD: f64 = 0.4;

    /// Classify a confidence score in [0.0, 1.0]
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::BUILDING_THRESHOLD {
            Self::Building
        } else if score >= Self::STREET_THRESHOLD {
            Self::Street
        } else if score >= Self::CITY_THRESHOLD {
            Self::City
        } else {
            Self::Region
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Building => "building-level",
            Self::Street => "street-level",
            Self::City => "city-level",
            Self::Region => "region-level",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    /// Matched position
    pub position: Coordinate,
    /// Matched address
    pub address: Address,
    /// Vendor confidence normalized to [0.0, 1.0]
    confidence: f64,
    /// Vendor confidence that the match is building-accurate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_building_level: Option<f64>,
    /// Vendor confidence that the match is street-accurate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_street_level: Option<f64>,
    /// Vendor confidence that the match is city-accurate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_city_level: Option<f64>,
}

impl GeocodingResult {
    /// Create a result with a validated confidence score
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfidence` if the score is outside [0.0, 1.0].
    pub fn new(
        position: Coordinate,
        address: Address,
        confidence: f64,
    ) -> Result<Self, InvalidConfidence> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(InvalidConfidence(confidence));
        }
        Ok(Self {
            position,
            address,
            confidence,
            confidence_building_level: None,
            confidence_street_level: None,
            confidence_city_level: None,
        })
    }

    /// Attach the vendor's per-level confidence breakdown
    #[must_use]
    pub fn with_level_confidences(
        mut self,
        building: Option<f64>,
        street: Option<f64>,
        city: Option<f64>,
    ) -> Self {
        self.confidence_building_level = building;
        self.confidence_street_level = street;
        self.confidence_city_level = city;
        self
    }

    /// The normalized confidence score
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Precision tier derived from the confidence score
    #[must_use]
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.confidence)
    }
}

/// A single autocomplete suggestion
///
/// A position is not guaranteed; some vendors return textual suggestions
/// without coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResult {
    /// Suggested address
    pub address: Address,
    /// Position of the suggestion, when the vendor supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinate>,
    /// Vendor ranking score, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn paris() -> Coordinate {
        Coordinate::new_unchecked(48.8566, 2.3522)
    }

    #[test]
    fn test_confidence_in_range_passes_through() {
        let result = GeocodingResult::new(paris(), Address::default(), 0.95).expect("valid");
        assert!((result.confidence() - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        assert!(GeocodingResult::new(paris(), Address::default(), 1.1).is_err());
        assert!(GeocodingResult::new(paris(), Address::default(), -0.1).is_err());
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ConfidenceTier::from_score(1.0), ConfidenceTier::Building);
        assert_eq!(ConfidenceTier::from_score(0.9), ConfidenceTier::Building);
        assert_eq!(ConfidenceTier::from_score(0.89), ConfidenceTier::Street);
        assert_eq!(ConfidenceTier::from_score(0.7), ConfidenceTier::Street);
        assert_eq!(ConfidenceTier::from_score(0.69), ConfidenceTier::City);
        assert_eq!(ConfidenceTier::from_score(0.4), ConfidenceTier::City);
        assert_eq!(ConfidenceTier::from_score(0.39), ConfidenceTier::Region);
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Region);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ConfidenceTier::Building.to_string(), "building-level");
        assert_eq!(ConfidenceTier::Region.to_string(), "region-level");
    }

    #[test]
    fn test_level_confidences_builder() {
        let result = GeocodingResult::new(paris(), Address::default(), 0.95)
            .expect("valid")
            .with_level_confidences(Some(1.0), Some(1.0), None);
        assert_eq!(result.confidence_building_level, Some(1.0));
        assert_eq!(result.confidence_city_level, None);
        assert_eq!(result.tier(), ConfidenceTier::Building);
    }

    #[test]
    fn test_autocomplete_without_position() {
        let suggestion = AutocompleteResult {
            address: Address {
                city: Some("Paris".to_string()),
                ..Address::default()
            },
            position: None,
            relevance: Some(0.8),
        };
        let json = serde_json::to_string(&suggestion).expect("serialize");
        assert!(!json.contains("position"));
    }

    proptest! {
        #[test]
        fn tier_is_monotonic_in_confidence(low in 0.0f64..=1.0, high in 0.0f64..=1.0) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };
            // A higher score never yields a coarser tier. Tier ordering is
            // Building < Street < City < Region in declaration order.
            let rank = |tier: ConfidenceTier| match tier {
                ConfidenceTier::Building => 0,
                ConfidenceTier::Street => 1,
                ConfidenceTier::City => 2,
                ConfidenceTier::Region => 3,
            };
            prop_assert!(rank(ConfidenceTier::from_score(high)) <= rank(ConfidenceTier::from_score(low)));
        }
    }
}
