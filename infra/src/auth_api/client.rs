//! HTTP client for the token-issuing auth service.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use gsc_core::domain::value_objects::IssuedToken;
use gsc_core::errors::{AuthServiceError, DomainError};
use gsc_core::services::AuthServiceTrait;

use crate::auth_api::dto::{TokenErrorResponse, TokenResponse};
use crate::InfrastructureError;

/// Fixed sub-path of the token endpoint on the auth service
const TOKEN_PATH: &str = "/auth/token";

/// Auth service client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthServiceConfig {
    /// Base URL of the auth service
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl AuthServiceConfig {
    /// Create configuration from environment variables
    ///
    /// `AUTH_SERVICE_BASE_URL` is required; a missing value indicates a
    /// misdeployment and fails fast instead of degrading into fetch
    /// failures later.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let base_url = std::env::var("AUTH_SERVICE_BASE_URL").map_err(|_| {
            InfrastructureError::Config("AUTH_SERVICE_BASE_URL not set".to_string())
        })?;

        Ok(Self {
            base_url,
            request_timeout_secs: std::env::var("AUTH_SERVICE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a new configuration with defaults for everything but the URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: 30,
        }
    }
}

/// Mask a credential for log output, keeping only the last four characters
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", chars[chars.len() - 4..].iter().collect::<String>())
    }
}

/// HTTP implementation of the auth service boundary
pub struct HttpAuthService {
    client: reqwest::Client,
    config: AuthServiceConfig,
}

impl HttpAuthService {
    /// Create a new auth service client
    ///
    /// # Arguments
    /// * `config` - Endpoint and timeout settings
    ///
    /// # Returns
    /// A new instance of HttpAuthService
    pub fn new(config: AuthServiceConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Auth service client initialized for {}", config.base_url);

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = AuthServiceConfig::from_env()?;
        Self::new(config)
    }

    /// Full URL of the token endpoint
    pub(crate) fn token_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), TOKEN_PATH)
    }
}

#[async_trait]
impl AuthServiceTrait for HttpAuthService {
    async fn fetch_token(&self) -> Result<IssuedToken, DomainError> {
        let url = self.token_url();
        debug!("Requesting token from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Auth service request failed: {}", e);
            AuthServiceError::Network {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read auth service response: {}", e);
            AuthServiceError::Network {
                message: e.to_string(),
            }
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<TokenErrorResponse>(&body)
                .map(|err| err.detail())
                .unwrap_or_else(|_| body.clone());
            error!("Auth service returned {}: {}", status, message);
            return Err(AuthServiceError::UpstreamStatus {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Auth service response did not match the token contract: {}", e);
            AuthServiceError::InvalidResponse {
                message: e.to_string(),
            }
        })?;

        let issued = parsed.into_issued().map_err(|e| {
            error!("Auth service response rejected: {}", e);
            e
        })?;

        debug!(
            "Received token {} expiring at {}",
            mask_token(&issued.access_token),
            issued.expires_at
        );

        Ok(issued)
    }
}
