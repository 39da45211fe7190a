//! Geoapify provider
//!
//! Translates the contract operations into Geoapify v1 requests and
//! normalizes the vendor's GeoJSON answers into the canonical model.
//! One HTTP call per operation; no internal retry, no cache.

use std::time::Duration;

use async_trait::async_trait;
use client::{LocationError, LocationProvider, MatrixCeiling, validate};
use domain::{
    Address, AutocompleteResult, Coordinate, DistanceMatrixResult, DistanceUnit, GeocodingResult,
    RouteInfo, TravelMode,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::GeoapifyConfig;
use crate::models::{
    RawFeature, RawFeatureCollection, RawGeometry, RawMatrixResponse, RawProperties,
};

/// Geoapify's documented route-matrix request ceiling per dimension
const MAX_MATRIX_WAYPOINTS: usize = 10;

/// Location provider backed by the Geoapify v1 API
#[derive(Debug)]
pub struct GeoapifyProvider {
    client: Client,
    config: GeoapifyConfig,
}

impl GeoapifyProvider {
    /// Create a new Geoapify provider
    ///
    /// # Errors
    ///
    /// Returns `LocationError::Validation` if the configuration is
    /// invalid (missing API key) and `LocationError::Api` if the HTTP
    /// client cannot be initialized.
    pub fn new(config: &GeoapifyConfig) -> Result<Self, LocationError> {
        config.validate().map_err(LocationError::Validation)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LocationError::transport("failed to initialize HTTP client", e))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Vendor token for a travel mode
    ///
    /// Geoapify accepts all four canonical modes, so the mapping is
    /// total; adapters for narrower vendors must reject here instead.
    const fn mode_token(mode: TravelMode) -> &'static str {
        match mode {
            TravelMode::Driving => "drive",
            TravelMode::Walking => "walk",
            TravelMode::Cycling => "bike",
            TravelMode::Truck => "truck",
        }
    }

    /// Issue one GET request and parse the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, LocationError> {
        let url = format!("{}{path}", self.config.base_url);
        debug!(%url, "sending vendor request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationError::transport(
                        format!("request timed out after {} seconds", self.config.timeout_secs),
                        e,
                    )
                } else {
                    LocationError::transport("connection failed", e)
                }
            })?;

        let response = Self::classify_status(response)?;
        response
            .json()
            .await
            .map_err(LocationError::malformed_response)
    }

    /// Map a non-2xx vendor status onto the error taxonomy
    fn classify_status(response: Response) -> Result<Response, LocationError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LocationError::authentication(format!(
                "vendor rejected credentials (HTTP {status})"
            )));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LocationError::RateLimit {
                retry_after_secs: response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(LocationError::api(
                status.as_u16(),
                format!("vendor returned HTTP {status}"),
            ));
        }

        Ok(response)
    }

    fn auth_param(&self) -> (&'static str, String) {
        ("apiKey", self.config.api_key.clone())
    }

    /// Canonical address from vendor feature properties
    ///
    /// Fields the vendor did not return stay `None`.
    fn convert_address(props: &RawProperties) -> Address {
        Address {
            street: props.street.clone(),
            house_number: props.housenumber.clone(),
            city: props.city.clone(),
            postcode: props.postcode.clone(),
            state: props.state.clone(),
            country: props.country.clone(),
            country_code: props.country_code.clone(),
            formatted: props.formatted.clone(),
        }
    }

    /// Canonical position from GeoJSON `[lon, lat]` coordinates
    ///
    /// `Ok(None)` when the vendor omitted usable coordinates; an error
    /// when they are present but out of range.
    fn convert_position(
        geometry: Option<&RawGeometry>,
    ) -> Result<Option<Coordinate>, LocationError> {
        let Some(geometry) = geometry else {
            return Ok(None);
        };
        let [lon, lat, ..] = geometry.coordinates[..] else {
            return Ok(None);
        };
        Coordinate::new(lat, lon)
            .map(Some)
            .map_err(LocationError::malformed_response)
    }

    fn convert_geocoding(feature: RawFeature) -> Result<Option<GeocodingResult>, LocationError> {
        let Some(position) = Self::convert_position(feature.geometry.as_ref())? else {
            return Ok(None);
        };

        let address = Self::convert_address(&feature.properties);
        let rank = feature.properties.rank.unwrap_or_default();
        let confidence = rank.confidence.unwrap_or(0.0);

        let result = GeocodingResult::new(position, address, confidence)
            .map_err(LocationError::malformed_response)?
            .with_level_confidences(
                rank.confidence_building_level,
                rank.confidence_street_level,
                rank.confidence_city_level,
            );
        Ok(Some(result))
    }

    fn convert_autocomplete(feature: RawFeature) -> Result<AutocompleteResult, LocationError> {
        let position = Self::convert_position(feature.geometry.as_ref())?;
        let relevance = feature.properties.rank.as_ref().and_then(|r| r.confidence);
        Ok(AutocompleteResult {
            address: Self::convert_address(&feature.properties),
            position,
            relevance,
        })
    }

    /// Waypoints in the vendor's `lat,lon|lat,lon` list form
    fn waypoint_list(points: &[Coordinate]) -> String {
        points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[async_trait]
impl LocationProvider for GeoapifyProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodingResult>, LocationError> {
        validate::query(query)?;

        let params = [
            ("text", query.to_string()),
            ("format", "json".to_string()),
            self.auth_param(),
        ];
        let collection: RawFeatureCollection = self.get_json("/geocode/search", &params).await?;

        // Vendor-relevance order is preserved; features without usable
        // coordinates are skipped, matches with bad ones are an error.
        let mut results = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            if let Some(result) = Self::convert_geocoding(feature)? {
                results.push(result);
            }
        }

        debug!(count = results.len(), "geocoded query");
        Ok(results)
    }

    #[instrument(skip(self), fields(position = %position))]
    async fn reverse_geocode(
        &self,
        position: Coordinate,
    ) -> Result<Vec<Address>, LocationError> {
        let params = [
            ("lat", position.latitude().to_string()),
            ("lon", position.longitude().to_string()),
            ("format", "json".to_string()),
            self.auth_param(),
        ];
        let collection: RawFeatureCollection = self.get_json("/geocode/reverse", &params).await?;

        let addresses: Vec<Address> = collection
            .features
            .iter()
            .map(|feature| Self::convert_address(&feature.properties))
            .collect();

        if addresses.is_empty() {
            warn!("no addresses found for position");
        }
        Ok(addresses)
    }

    #[instrument(skip(self))]
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AutocompleteResult>, LocationError> {
        validate::query(query)?;
        validate::autocomplete_limit(limit)?;

        let params = [
            ("text", query.to_string()),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
            self.auth_param(),
        ];
        let collection: RawFeatureCollection =
            self.get_json("/geocode/autocomplete", &params).await?;

        let mut suggestions = collection
            .features
            .into_iter()
            .map(Self::convert_autocomplete)
            .collect::<Result<Vec<_>, _>>()?;
        // The contract truncates even if the vendor over-delivers.
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    #[instrument(skip(self, sources, targets), fields(n_sources = sources.len(), n_targets = targets.len()))]
    async fn distance_matrix(
        &self,
        sources: &[Coordinate],
        targets: &[Coordinate],
        mode: TravelMode,
        units: DistanceUnit,
    ) -> Result<DistanceMatrixResult, LocationError> {
        validate::matrix_size(sources, targets, self.matrix_ceiling())?;

        let params = [
            ("sources", Self::waypoint_list(sources)),
            ("targets", Self::waypoint_list(targets)),
            ("mode", Self::mode_token(mode).to_string()),
            self.auth_param(),
        ];
        let raw: RawMatrixResponse = self.get_json("/routematrix", &params).await?;

        let mut distances = Vec::with_capacity(raw.sources_to_targets.len());
        let mut durations = Vec::with_capacity(raw.sources_to_targets.len());
        for row in &raw.sources_to_targets {
            distances.push(row.iter().map(|cell| cell.distance).collect());
            durations.push(row.iter().map(|cell| cell.time).collect());
        }

        DistanceMatrixResult::new(sources.to_vec(), targets.to_vec(), units, distances, durations)
            .map_err(LocationError::malformed_response)
    }

    #[instrument(skip(self), fields(from = %source, to = %target))]
    async fn route(
        &self,
        source: Coordinate,
        target: Coordinate,
        mode: TravelMode,
    ) -> Result<RouteInfo, LocationError> {
        let params = [
            ("from", source.to_string()),
            ("to", target.to_string()),
            ("mode", Self::mode_token(mode).to_string()),
            self.auth_param(),
        ];
        let collection: RawFeatureCollection = self.get_json("/routing", &params).await?;

        let Some(feature) = collection.features.first() else {
            return Err(LocationError::NoRoute {
                from: source.to_string(),
                to: target.to_string(),
            });
        };

        let distance = feature
            .properties
            .distance
            .ok_or_else(|| LocationError::unexpected_schema("route feature missing distance"))?;
        let time = feature
            .properties
            .time
            .ok_or_else(|| LocationError::unexpected_schema("route feature missing time"))?;

        Ok(RouteInfo::new(distance, time))
    }

    fn matrix_ceiling(&self) -> MatrixCeiling {
        MatrixCeiling {
            max_sources: MAX_MATRIX_WAYPOINTS,
            max_targets: MAX_MATRIX_WAYPOINTS,
        }
    }

    fn close(&self) {
        // The pooled connections are torn down when the reqwest client
        // drops with the provider; nothing needs eager flushing.
        debug!("geoapify transport released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRank;

    #[test]
    fn test_mode_tokens() {
        assert_eq!(GeoapifyProvider::mode_token(TravelMode::Driving), "drive");
        assert_eq!(GeoapifyProvider::mode_token(TravelMode::Walking), "walk");
        assert_eq!(GeoapifyProvider::mode_token(TravelMode::Cycling), "bike");
        assert_eq!(GeoapifyProvider::mode_token(TravelMode::Truck), "truck");
    }

    #[test]
    fn test_new_rejects_missing_api_key() {
        let config = GeoapifyConfig::new("");
        let err = GeoapifyProvider::new(&config).expect_err("invalid config");
        assert!(matches!(err, LocationError::Validation(_)));
    }

    #[test]
    fn test_waypoint_list_format() {
        let points = [
            Coordinate::new_unchecked(48.8566, 2.3522),
            Coordinate::new_unchecked(51.5074, -0.1278),
        ];
        assert_eq!(
            GeoapifyProvider::waypoint_list(&points),
            "48.8566,2.3522|51.5074,-0.1278"
        );
    }

    #[test]
    fn test_convert_position_geojson_order() {
        let geometry = RawGeometry {
            coordinates: vec![2.3522, 48.8566],
        };
        let position = GeoapifyProvider::convert_position(Some(&geometry))
            .expect("in range")
            .expect("present");
        assert!((position.latitude() - 48.8566).abs() < f64::EPSILON);
        assert!((position.longitude() - 2.3522).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_position_missing_coordinates() {
        assert_eq!(GeoapifyProvider::convert_position(None).expect("ok"), None);
        let truncated = RawGeometry {
            coordinates: vec![2.3522],
        };
        assert_eq!(
            GeoapifyProvider::convert_position(Some(&truncated)).expect("ok"),
            None
        );
    }

    #[test]
    fn test_convert_position_out_of_range_is_schema_error() {
        let geometry = RawGeometry {
            coordinates: vec![200.0, 95.0],
        };
        let err = GeoapifyProvider::convert_position(Some(&geometry)).expect_err("out of range");
        assert!(matches!(err, LocationError::Api { .. }));
    }

    #[test]
    fn test_convert_geocoding_defaults_missing_confidence() {
        let feature = RawFeature {
            properties: RawProperties {
                city: Some("Paris".to_string()),
                ..RawProperties::default()
            },
            geometry: Some(RawGeometry {
                coordinates: vec![2.3522, 48.8566],
            }),
        };
        let result = GeoapifyProvider::convert_geocoding(feature)
            .expect("convertible")
            .expect("has coordinates");
        assert!(result.confidence().abs() < f64::EPSILON);
        assert_eq!(result.address.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_convert_geocoding_carries_rank_breakdown() {
        let feature = RawFeature {
            properties: RawProperties {
                rank: Some(RawRank {
                    confidence: Some(0.95),
                    confidence_building_level: Some(0.9),
                    confidence_street_level: Some(1.0),
                    confidence_city_level: Some(1.0),
                }),
                ..RawProperties::default()
            },
            geometry: Some(RawGeometry {
                coordinates: vec![2.3522, 48.8566],
            }),
        };
        let result = GeoapifyProvider::convert_geocoding(feature)
            .expect("convertible")
            .expect("has coordinates");
        assert!((result.confidence() - 0.95).abs() < f64::EPSILON);
        assert_eq!(result.confidence_street_level, Some(1.0));
    }
}
