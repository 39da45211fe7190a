//! Unified error taxonomy
//!
//! Every provider adapter translates its vendor's failure modes into
//! exactly one of these kinds; no vendor error type or error code leaks
//! past the adapter boundary. Callers match the enum to handle any SDK
//! failure uniformly, or a single variant for targeted handling.

use thiserror::Error;

/// Boxed cause preserved for diagnostics
pub type ErrorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during location operations
#[derive(Debug, Error)]
pub enum LocationError {
    /// Caller-supplied input violates a precondition
    ///
    /// Raised at the contract boundary before any network call; never
    /// caused by vendor response content.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Vendor rejected the credentials
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Vendor signalled quota exhaustion
    #[error("rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimit {
        /// Seconds to wait before retrying, when the vendor provided one
        retry_after_secs: Option<u64>,
    },

    /// Vendor-side or transport failure
    ///
    /// Covers 5xx responses, malformed bodies, unexpected schemas, and
    /// transport failures (timeout, DNS, connection refused). The vendor
    /// status and the underlying cause are preserved for diagnostics.
    #[error("API request failed{}: {message}", fmt_status(*status))]
    Api {
        /// Vendor HTTP status, when a response was received
        status: Option<u16>,
        /// Diagnostic message
        message: String,
        /// Underlying transport or parse failure
        #[source]
        source: Option<ErrorSource>,
    },

    /// The vendor reported that no route exists between the two points
    ///
    /// A legitimate domain outcome, distinguishable from transport or
    /// vendor failures.
    #[error("no route found from {from} to {to}")]
    NoRoute {
        /// Origin, in `"lat,lon"` form
        from: String,
        /// Destination, in `"lat,lon"` form
        to: String,
    },
}

fn fmt_status(status: Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl LocationError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create an API error carrying the vendor status
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status: Some(status),
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a transport failure, preserving it as the cause
    pub fn transport(message: impl Into<String>, source: impl Into<ErrorSource>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Wrap a response-parsing failure, preserving it as the cause
    pub fn malformed_response(source: impl Into<ErrorSource>) -> Self {
        let source = source.into();
        Self::Api {
            status: None,
            message: format!("failed to parse vendor response: {source}"),
            source: Some(source),
        }
    }

    /// Flag a well-formed response whose content violates the vendor schema
    pub fn unexpected_schema(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: message.into(),
            source: None,
        }
    }

    /// Whether the caller may safely retry the operation
    ///
    /// Location queries are read-only, so transport and vendor-side
    /// failures create no partial state. Validation, authentication, and
    /// no-route outcomes will not change on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit { .. } | Self::Api { .. })
    }
}
