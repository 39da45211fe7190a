//! Provider contract
//!
//! The operation set every vendor adapter must implement, independent of
//! any vendor. Adapters are polymorphic implementations of this trait,
//! selected at construction time via dependency injection; the facade
//! never branches on adapter identity.

use async_trait::async_trait;
use domain::{
    Address, AutocompleteResult, Coordinate, DistanceMatrixResult, DistanceUnit, GeocodingResult,
    RouteInfo, TravelMode,
};
#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

use crate::error::LocationError;

/// Default number of autocomplete suggestions
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 5;

/// Largest request an adapter accepts for a distance matrix
///
/// Checked at the contract boundary before any network call; each
/// adapter declares its own documented ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCeiling {
    /// Maximum number of sources per request
    pub max_sources: usize,
    /// Maximum number of targets per request
    pub max_targets: usize,
}

impl Default for MatrixCeiling {
    fn default() -> Self {
        Self {
            max_sources: 10,
            max_targets: 10,
        }
    }
}

/// Contract for location service providers
///
/// Implementations must run the [`crate::validate`] helpers on their
/// inputs before constructing any request, translate every vendor
/// failure into a [`LocationError`], and never re-sort vendor-relevance
/// ordering. Unsupported travel modes are rejected with
/// [`LocationError::Validation`], never silently substituted.
#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Convert address text to geographic coordinates
    ///
    /// Results are returned in vendor-relevance order.
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodingResult>, LocationError>;

    /// Convert a geographic position to addresses
    async fn reverse_geocode(&self, position: Coordinate) -> Result<Vec<Address>, LocationError>;

    /// Suggest addresses for a partial query
    ///
    /// At most `limit` suggestions are returned even if the vendor
    /// offers more; `limit` must be within 1 to 50.
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AutocompleteResult>, LocationError>;

    /// Pairwise distances and durations between sources and targets
    ///
    /// The combined request size must fit [`Self::matrix_ceiling`].
    async fn distance_matrix(
        &self,
        sources: &[Coordinate],
        targets: &[Coordinate],
        mode: TravelMode,
        units: DistanceUnit,
    ) -> Result<DistanceMatrixResult, LocationError>;

    /// Distance and duration of a route between two points
    ///
    /// A vendor report that no route exists surfaces as
    /// [`LocationError::NoRoute`], not a generic API error.
    async fn route(
        &self,
        source: Coordinate,
        target: Coordinate,
        mode: TravelMode,
    ) -> Result<RouteInfo, LocationError>;

    /// The adapter's documented distance-matrix request ceiling
    fn matrix_ceiling(&self) -> MatrixCeiling {
        MatrixCeiling::default()
    }

    /// Release any transport resources held by the adapter
    ///
    /// Idempotent; called by the facade on explicit close and on drop.
    fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn LocationProvider) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn LocationProvider>();
    }

    #[test]
    fn test_default_ceiling() {
        let ceiling = MatrixCeiling::default();
        assert_eq!(ceiling.max_sources, 10);
        assert_eq!(ceiling.max_targets, 10);
    }
}
