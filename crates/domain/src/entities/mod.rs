//! Result records produced by provider adapters

mod address;
mod distance_matrix;
mod geocoding;
mod route;

pub use address::Address;
pub use distance_matrix::{DistanceMatrixResult, MatrixShapeError};
pub use geocoding::{AutocompleteResult, ConfidenceTier, GeocodingResult, InvalidConfidence};
pub use route::RouteInfo;
