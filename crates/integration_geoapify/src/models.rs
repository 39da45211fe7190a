//! Raw Geoapify wire types
//!
//! Deserialize-only mirrors of the vendor's JSON. Geocoding endpoints
//! answer GeoJSON feature collections with `[lon, lat]` coordinate
//! order; the route matrix answers a `sources_to_targets` table.

use serde::Deserialize;

/// GeoJSON feature collection returned by the geocoding endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct RawFeatureCollection {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    #[serde(default)]
    pub properties: RawProperties,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawProperties {
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub formatted: Option<String>,
    pub rank: Option<RawRank>,
    /// Route length in meters (routing endpoint only)
    pub distance: Option<f64>,
    /// Route travel time in seconds (routing endpoint only)
    pub time: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    /// `[longitude, latitude]` per GeoJSON
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRank {
    pub confidence: Option<f64>,
    pub confidence_building_level: Option<f64>,
    pub confidence_street_level: Option<f64>,
    pub confidence_city_level: Option<f64>,
}

/// Route matrix response
#[derive(Debug, Deserialize)]
pub(crate) struct RawMatrixResponse {
    #[serde(default)]
    pub sources_to_targets: Vec<Vec<RawMatrixCell>>,
}

/// One source-to-target pair; fields are absent when unreachable
#[derive(Debug, Deserialize)]
pub(crate) struct RawMatrixCell {
    pub distance: Option<f64>,
    pub time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_collection_parsing() {
        let json = r#"{
            "features": [{
                "properties": {
                    "city": "Paris",
                    "country": "France",
                    "country_code": "fr",
                    "formatted": "Paris, France",
                    "rank": { "confidence": 0.95, "confidence_city_level": 1.0 }
                },
                "geometry": { "type": "Point", "coordinates": [2.3522, 48.8566] }
            }]
        }"#;
        let collection: RawFeatureCollection = serde_json::from_str(json).expect("parse");
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.properties.city.as_deref(), Some("Paris"));
        let rank = feature.properties.rank.as_ref().expect("rank present");
        assert_eq!(rank.confidence, Some(0.95));
        assert_eq!(rank.confidence_building_level, None);

        let geometry = feature.geometry.as_ref().expect("geometry present");
        assert_eq!(geometry.coordinates, vec![2.3522, 48.8566]);
    }

    #[test]
    fn test_empty_collection() {
        let collection: RawFeatureCollection =
            serde_json::from_str(r#"{"features": []}"#).expect("parse");
        assert!(collection.features.is_empty());
        let collection: RawFeatureCollection = serde_json::from_str("{}").expect("parse");
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_matrix_parsing_with_unreachable_cell() {
        let json = r#"{
            "sources_to_targets": [
                [ { "distance": 1200.5, "time": 300 }, {} ]
            ]
        }"#;
        let matrix: RawMatrixResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(matrix.sources_to_targets.len(), 1);
        assert_eq!(matrix.sources_to_targets[0][0].distance, Some(1200.5));
        assert_eq!(matrix.sources_to_targets[0][1].distance, None);
        assert_eq!(matrix.sources_to_targets[0][1].time, None);
    }

    #[test]
    fn test_routing_properties_parsing() {
        let json = r#"{
            "features": [{
                "properties": { "distance": 5500.0, "time": 432.0 },
                "geometry": null
            }]
        }"#;
        let collection: RawFeatureCollection = serde_json::from_str(json).expect("parse");
        let props = &collection.features[0].properties;
        assert_eq!(props.distance, Some(5500.0));
        assert_eq!(props.time, Some(432.0));
    }
}
