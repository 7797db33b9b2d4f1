//! Unit tests for error types and response mapping

use crate::errors::{AuthServiceError, DomainError, ErrorResponse};

#[test]
fn test_upstream_status_display() {
    let err = AuthServiceError::UpstreamStatus {
        status: 500,
        message: "Internal server error".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "Auth service returned status 500: Internal server error"
    );
}

#[test]
fn test_transparent_auth_service_bridge() {
    let err: DomainError = AuthServiceError::Network {
        message: "connection refused".to_string(),
    }
    .into();

    // #[error(transparent)] must surface the inner message unchanged
    assert_eq!(err.to_string(), "Auth service request failed: connection refused");
}

#[test]
fn test_error_response_codes() {
    let config_err = DomainError::Configuration {
        message: "AUTH_SERVICE_BASE_URL not set".to_string(),
    };
    let response = ErrorResponse::from(&config_err);
    assert_eq!(response.error, "CONFIGURATION_ERROR");
    assert!(response.message.contains("AUTH_SERVICE_BASE_URL"));

    let fetch_err: DomainError = AuthServiceError::UpstreamStatus {
        status: 502,
        message: "bad gateway".to_string(),
    }
    .into();
    assert_eq!(ErrorResponse::from(&fetch_err).error, "AUTH_SERVICE_STATUS");

    let parse_err: DomainError = AuthServiceError::InvalidResponse {
        message: "empty access_token".to_string(),
    }
    .into();
    assert_eq!(
        ErrorResponse::from(&parse_err).error,
        "AUTH_SERVICE_INVALID_RESPONSE"
    );
}

#[test]
fn test_error_response_serialization_skips_empty_details() {
    let response = ErrorResponse::new("INTERNAL_ERROR", "boom");
    let json = serde_json::to_string(&response).unwrap();

    assert!(!json.contains("details"));

    let with_details = ErrorResponse::new("INTERNAL_ERROR", "boom")
        .with_details(serde_json::json!({ "attempt": 1 }));
    let json = serde_json::to_string(&with_details).unwrap();

    assert!(json.contains("\"attempt\":1"));
}
