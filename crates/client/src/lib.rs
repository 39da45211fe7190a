//! Provider abstraction layer for the location SDK
//!
//! Defines the [`LocationProvider`] contract every vendor adapter
//! implements, the unified [`LocationError`] taxonomy adapters translate
//! vendor failures into, the contract-boundary validation helpers, and
//! the [`LocationClient`] facade applications hold.

pub mod error;
pub mod facade;
pub mod provider;
pub mod validate;

pub use error::LocationError;
pub use facade::LocationClient;
#[cfg(any(test, feature = "mocks"))]
pub use provider::MockLocationProvider;
pub use provider::{DEFAULT_AUTOCOMPLETE_LIMIT, LocationProvider, MatrixCeiling};
