//! Error types for backend and geocoding calls.

use thiserror::Error;

use crate::api::models::TripId;
use crate::session::SessionError;
use crate::validation::ValidationError;

/// Errors that can occur while talking to a remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset, ...
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request to '{endpoint}' timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },

    /// Backend answered with a non-2xx status
    #[error("HTTP error! status: {status}, message: {body}")]
    Status { status: u16, body: String },

    /// Body did not match the expected schema
    #[error("Malformed response from '{endpoint}': {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Rejected before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Booking of trip {trip_id} was rejected: {message}")]
    BookingRejected { trip_id: TripId, message: String },

    #[error("Not signed in. Please log in first.")]
    NotAuthenticated,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status",
            ApiError::MalformedResponse { .. } => "malformed_response",
            ApiError::Encode(_) => "encode",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Validation(_) => "validation",
            ApiError::BookingRejected { .. } => "booking_rejected",
            ApiError::NotAuthenticated => "not_authenticated",
            ApiError::Session(_) => "session",
        }
    }

    /// Failures where the request may never have reached the backend.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            ApiError::Timeout { .. } => true,
            _ => false,
        }
    }

    /// HTTP status, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_body_text() {
        let err = ApiError::Status {
            status: 409,
            body: "Trip is full".to_string(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.kind(), "status");
        assert!(err.to_string().contains("Trip is full"));
        assert!(!err.is_transient());
    }

    #[test]
    fn timeout_is_transient() {
        let err = ApiError::Timeout {
            endpoint: "trips".to_string(),
            seconds: 30,
        };
        assert!(err.is_transient());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn validation_converts() {
        let err: ApiError = ValidationError::RatingOutOfRange { value: 6 }.into();
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("between 1 and 5"));
    }
}
