//! Geoapify integration for the location SDK
//!
//! Reference adapter implementing the [`client::LocationProvider`]
//! contract against the [Geoapify](https://apidocs.geoapify.com/) v1
//! HTTP API: geocoding, reverse geocoding, address autocomplete, route
//! matrix, and routing. Demonstrates the normalization rules every
//! adapter must follow: vendor JSON into the canonical `domain` types,
//! meters/seconds units, confidence scores in [0, 1], and vendor
//! failures translated into the `LocationError` taxonomy.
//!
//! # Example
//!
//! ```rust,ignore
//! use client::LocationClient;
//! use integration_geoapify::{GeoapifyConfig, GeoapifyProvider};
//!
//! let config = GeoapifyConfig::new("YOUR_API_KEY");
//! let provider = GeoapifyProvider::new(&config)?;
//! let client = LocationClient::new(provider);
//!
//! let results = client.geocode("Paris, France").await?;
//! println!("{}", results[0].position);
//! ```

mod config;
mod models;
mod provider;

pub use config::GeoapifyConfig;
pub use provider::GeoapifyProvider;
