//! Unit tests for the auth service client configuration

use crate::auth_api::client::{mask_token, AuthServiceConfig, HttpAuthService};
use crate::InfrastructureError;

#[test]
fn test_token_url_joins_fixed_path() {
    let service = HttpAuthService::new(AuthServiceConfig::new(
        "https://auth.example.com",
    ))
    .unwrap();

    assert_eq!(service.token_url(), "https://auth.example.com/auth/token");
}

#[test]
fn test_token_url_tolerates_trailing_slash() {
    let service = HttpAuthService::new(AuthServiceConfig::new(
        "https://auth.example.com/",
    ))
    .unwrap();

    assert_eq!(service.token_url(), "https://auth.example.com/auth/token");
}

#[test]
fn test_config_defaults() {
    let config = AuthServiceConfig::new("https://auth.example.com");
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_config_from_env_requires_base_url() {
    // The whole fetch path is misdeployed without a base URL; this must be
    // a configuration error, not a fetch failure
    std::env::remove_var("AUTH_SERVICE_BASE_URL");
    let err = AuthServiceConfig::from_env().unwrap_err();
    assert!(matches!(err, InfrastructureError::Config(_)));
    assert!(err.to_string().contains("AUTH_SERVICE_BASE_URL"));

    std::env::set_var("AUTH_SERVICE_BASE_URL", "https://auth.example.com");
    std::env::set_var("AUTH_SERVICE_TIMEOUT_SECS", "5");
    let config = AuthServiceConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://auth.example.com");
    assert_eq!(config.request_timeout_secs, 5);

    std::env::remove_var("AUTH_SERVICE_BASE_URL");
    std::env::remove_var("AUTH_SERVICE_TIMEOUT_SECS");
}

#[test]
fn test_mask_token_keeps_suffix_only() {
    assert_eq!(mask_token("ya29.a0AfB-secret-1234"), "****1234");
    assert_eq!(mask_token("abc"), "****");
    assert_eq!(mask_token(""), "****");
}
