//! Contract-boundary input validation
//!
//! The single point of truth for precondition checks. Adapters call
//! these before constructing any request; the facade never re-validates.
//! Every failure here is a [`LocationError::Validation`] raised before
//! any network I/O.

use domain::Coordinate;

use crate::error::LocationError;
use crate::provider::MatrixCeiling;

/// Smallest accepted autocomplete limit
pub const MIN_AUTOCOMPLETE_LIMIT: usize = 1;
/// Largest accepted autocomplete limit
pub const MAX_AUTOCOMPLETE_LIMIT: usize = 50;

/// Require a non-empty, non-whitespace query string
pub fn query(query: &str) -> Result<(), LocationError> {
    if query.trim().is_empty() {
        return Err(LocationError::validation("query must not be empty"));
    }
    Ok(())
}

/// Require an autocomplete limit within the accepted range
pub fn autocomplete_limit(limit: usize) -> Result<(), LocationError> {
    if !(MIN_AUTOCOMPLETE_LIMIT..=MAX_AUTOCOMPLETE_LIMIT).contains(&limit) {
        return Err(LocationError::validation(format!(
            "limit must be between {MIN_AUTOCOMPLETE_LIMIT} and {MAX_AUTOCOMPLETE_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}

/// Require a non-empty waypoint list
pub fn waypoints(name: &str, points: &[Coordinate]) -> Result<(), LocationError> {
    if points.is_empty() {
        return Err(LocationError::validation(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}

/// Require a matrix request to fit the adapter's declared ceiling
pub fn matrix_size(
    sources: &[Coordinate],
    targets: &[Coordinate],
    ceiling: MatrixCeiling,
) -> Result<(), LocationError> {
    waypoints("sources", sources)?;
    waypoints("targets", targets)?;
    if sources.len() > ceiling.max_sources || targets.len() > ceiling.max_targets {
        return Err(LocationError::validation(format!(
            "matrix request {}x{} exceeds the adapter ceiling of {}x{}",
            sources.len(),
            targets.len(),
            ceiling.max_sources,
            ceiling.max_targets
        )));
    }
    Ok(())
}
