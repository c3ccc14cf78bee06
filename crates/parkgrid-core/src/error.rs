//! Error handling for Parkgrid
//!
//! Provides error types for all layers of the application:
//! - Layout errors (validation of documents and canvas state)
//! - API errors (backend persistence and transport)
//! - Geolocation errors (device position lookup)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout validation error type
///
/// Raised when a layout document or live canvas fails validation
/// before a save. Validation failures abort the save with no partial write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contains no elements at all
    #[error("Layout must contain at least one element")]
    EmptyLayout,

    /// An element's position is not aligned to the configured grid
    #[error("Element {id} is off the grid at ({x}, {y})")]
    OffGrid {
        /// The offending element's id.
        id: u64,
        /// The element's x position.
        x: i32,
        /// The element's y position.
        y: i32,
    },

    /// The referenced element does not exist in the layout
    #[error("Unknown element: {id}")]
    UnknownElement {
        /// The id that was not found.
        id: u64,
    },

    /// A spot-only operation was applied to a fixture element
    #[error("Element {id} is not a parking spot")]
    NotASpot {
        /// The id of the non-spot element.
        id: u64,
    },
}

/// Backend API error type
///
/// Represents failures talking to the external persistence service.
/// These are surfaced to the user with a retry affordance; in-memory
/// edits always survive them.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },

    /// The request did not complete in time
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The requested resource does not exist on the backend
    #[error("Not found: {resource}")]
    NotFound {
        /// A description of the missing resource.
        resource: String,
    },

    /// A save was requested while another save was still in flight
    #[error("A save is already in progress")]
    SaveInProgress,

    /// The payload could not be encoded or decoded
    #[error("Serialization error: {reason}")]
    Serialization {
        /// The reason the payload could not be handled.
        reason: String,
    },

    /// The request never reached the backend
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason the transport failed.
        reason: String,
    },
}

/// Geolocation error type
///
/// Device position failures never block the editor; callers degrade to a
/// fallback map center.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The user denied the location permission
    #[error("Location permission denied")]
    PermissionDenied,

    /// The position lookup timed out
    #[error("Location lookup timed out")]
    Timeout,

    /// No position source is available on this device
    #[error("Location unavailable")]
    Unavailable,
}

/// Main error type for Parkgrid
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout validation error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Backend API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Geolocation error
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the failed operation is worth retrying.
    ///
    /// Network-shaped failures are retryable; validation failures are not,
    /// retrying them without changing the layout cannot succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError::Http { .. })
                | Error::Api(ApiError::Timeout { .. })
                | Error::Api(ApiError::Transport { .. })
                | Error::Api(ApiError::SaveInProgress)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound { .. }))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(Error::from(ApiError::Timeout { timeout_ms: 10_000 }).is_retryable());
        assert!(Error::from(ApiError::SaveInProgress).is_retryable());
        assert!(!Error::from(LayoutError::EmptyLayout).is_retryable());
        assert!(Error::from(LayoutError::EmptyLayout).is_validation_error());
    }

    #[test]
    fn test_not_found_detection() {
        let err = Error::from(ApiError::NotFound {
            resource: "establishment 7".to_string(),
        });
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
    }
}
