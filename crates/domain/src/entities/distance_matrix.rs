//! Distance matrix result record

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::{Coordinate, DistanceUnit};

/// Error type for matrix tables whose shape does not match the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "matrix shape mismatch: expected {expected_rows}x{expected_cols} {table}, got {rows}x{cols}"
)]
pub struct MatrixShapeError {
    /// Which table was malformed ("distances" or "durations")
    pub table: &'static str,
    /// Expected row count (#sources)
    pub expected_rows: usize,
    /// Expected column count (#targets)
    pub expected_cols: usize,
    /// Actual row count
    pub rows: usize,
    /// Actual column count (of the first offending row)
    pub cols: usize,
}

/// Pairwise distances and durations between sources and targets
///
/// `distances[i][j]` is the distance in meters and `durations[i][j]` the
/// travel time in seconds from `sources[i]` to `targets[j]`. An
/// unreachable or vendor-omitted pair is `None`, never a fabricated zero.
/// Tables are always metric; `units` records the caller's requested
/// display unit and conversion happens on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrixResult {
    /// Source positions, in request order
    pub sources: Vec<Coordinate>,
    /// Target positions, in request order
    pub targets: Vec<Coordinate>,
    /// Requested display unit (tables themselves stay in meters)
    pub units: DistanceUnit,
    distances: Vec<Vec<Option<f64>>>,
    durations: Vec<Vec<Option<f64>>>,
}

impl DistanceMatrixResult {
    /// Create a matrix result, enforcing the shape invariant
    ///
    /// # Errors
    ///
    /// Returns `MatrixShapeError` if either table is not exactly
    /// (#sources x #targets).
    pub fn new(
        sources: Vec<Coordinate>,
        targets: Vec<Coordinate>,
        units: DistanceUnit,
        distances: Vec<Vec<Option<f64>>>,
        durations: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, MatrixShapeError> {
        check_shape("distances", &distances, sources.len(), targets.len())?;
        check_shape("durations", &durations, sources.len(), targets.len())?;
        Ok(Self {
            sources,
            targets,
            units,
            distances,
            durations,
        })
    }

    /// Matrix dimensions as (#sources, #targets)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.sources.len(), self.targets.len())
    }

    /// Distance in meters from source `i` to target `j`
    ///
    /// `None` when the pair is unreachable or out of bounds.
    #[must_use]
    pub fn distance_meters(&self, i: usize, j: usize) -> Option<f64> {
        self.distances.get(i)?.get(j).copied()?
    }

    /// Duration in seconds from source `i` to target `j`
    #[must_use]
    pub fn duration_seconds(&self, i: usize, j: usize) -> Option<f64> {
        self.durations.get(i)?.get(j).copied()?
    }

    /// The raw distance table in meters
    #[must_use]
    pub fn distances(&self) -> &[Vec<Option<f64>>] {
        &self.distances
    }

    /// The raw duration table in seconds
    #[must_use]
    pub fn durations(&self) -> &[Vec<Option<f64>>] {
        &self.durations
    }

    /// The distance table converted to the requested display unit
    #[must_use]
    pub fn distances_in_units(&self) -> Vec<Vec<Option<f64>>> {
        self.distances
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|meters| self.units.from_meters(meters)))
                    .collect()
            })
            .collect()
    }
}

fn check_shape(
    table: &'static str,
    rows: &[Vec<Option<f64>>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), MatrixShapeError> {
    let mismatch = |rows_found: usize, cols_found: usize| MatrixShapeError {
        table,
        expected_rows,
        expected_cols,
        rows: rows_found,
        cols: cols_found,
    };

    if rows.len() != expected_rows {
        return Err(mismatch(rows.len(), 0));
    }
    for row in rows {
        if row.len() != expected_cols {
            return Err(mismatch(rows.len(), row.len()));
        }
    }
    Ok(())
}
