//! Client facade
//!
//! The object application code holds. Constructed with exactly one
//! provider instance and forwards every contract operation to it
//! verbatim; validation lives in the contract/adapter, not here, and
//! errors propagate unchanged.

use domain::{
    Address, AutocompleteResult, Coordinate, DistanceMatrixResult, DistanceUnit, GeocodingResult,
    RouteInfo, TravelMode,
};
use tracing::debug;

use crate::error::LocationError;
use crate::provider::{DEFAULT_AUTOCOMPLETE_LIMIT, LocationProvider};

/// High-level client for location services
///
/// Owns the scoped lifecycle of the provider's transport: release is
/// explicit via [`LocationClient::close`] or automatic on drop, so the
/// transport is never leaked even when a scope exits early or unwinds.
///
/// Concurrent use of one instance from multiple tasks is safe exactly
/// when the held provider's transport is; the `Send + Sync` bound on
/// [`LocationProvider`] makes that the adapter's documented obligation,
/// not an assumption made here. Independent instances share nothing.
#[derive(Debug)]
pub struct LocationClient<P: LocationProvider> {
    provider: P,
    closed: bool,
}

impl<P: LocationProvider> LocationClient<P> {
    /// Create a client holding the given provider
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            closed: false,
        }
    }

    /// Convert address text to geographic coordinates
    pub async fn geocode(&self, query: &str) -> Result<Vec<GeocodingResult>, LocationError> {
        self.provider.geocode(query).await
    }

    /// Convert a geographic position to addresses
    pub async fn reverse_geocode(
        &self,
        position: Coordinate,
    ) -> Result<Vec<Address>, LocationError> {
        self.provider.reverse_geocode(position).await
    }

    /// Suggest addresses for a partial query, with the default limit
    pub async fn autocomplete(
        &self,
        query: &str,
    ) -> Result<Vec<AutocompleteResult>, LocationError> {
        self.provider
            .autocomplete(query, DEFAULT_AUTOCOMPLETE_LIMIT)
            .await
    }

    /// Suggest addresses for a partial query, with an explicit limit
    pub async fn autocomplete_with_limit(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AutocompleteResult>, LocationError> {
        self.provider.autocomplete(query, limit).await
    }

    /// Pairwise distances and durations between sources and targets
    pub async fn distance_matrix(
        &self,
        sources: &[Coordinate],
        targets: &[Coordinate],
        mode: TravelMode,
        units: DistanceUnit,
    ) -> Result<DistanceMatrixResult, LocationError> {
        self.provider
            .distance_matrix(sources, targets, mode, units)
            .await
    }

    /// Distance and duration of a route between two points
    pub async fn route(
        &self,
        source: Coordinate,
        target: Coordinate,
        mode: TravelMode,
    ) -> Result<RouteInfo, LocationError> {
        self.provider.route(source, target, mode).await
    }

    /// Release the provider's transport resources
    ///
    /// Idempotent; dropping the client without calling this releases
    /// them anyway.
    pub fn close(&mut self) {
        if !self.closed {
            debug!("closing location client");
            self.provider.close();
            self.closed = true;
        }
    }
}

impl<P: LocationProvider> Drop for LocationClient<P> {
    fn drop(&mut self) {
        self.close();
    }
}
