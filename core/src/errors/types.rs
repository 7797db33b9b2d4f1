//! Specific error types for auth service interaction and API error rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DomainError;

/// Errors raised while fetching a token from the auth service
#[derive(Error, Debug)]
pub enum AuthServiceError {
    /// The auth service answered with a non-success status code
    #[error("Auth service returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// The request never produced a readable response
    #[error("Auth service request failed: {message}")]
    Network { message: String },

    /// The response body could not be translated into a token
    #[error("Invalid auth service response: {message}")]
    InvalidResponse { message: String },
}

/// Unified error response structure for API responses
///
/// The route layer renders this envelope whenever an operation reports a
/// failure; a half-filled token is never exposed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Convert DomainError to ErrorResponse
impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let error_code = match err {
            DomainError::Configuration { .. } => "CONFIGURATION_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::AuthService(service_err) => match service_err {
                AuthServiceError::UpstreamStatus { .. } => "AUTH_SERVICE_STATUS",
                AuthServiceError::Network { .. } => "AUTH_SERVICE_UNREACHABLE",
                AuthServiceError::InvalidResponse { .. } => "AUTH_SERVICE_INVALID_RESPONSE",
            },
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
