//! Wire types for the auth service token endpoint.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use gsc_core::domain::value_objects::IssuedToken;
use gsc_core::errors::AuthServiceError;

/// Successful response body of `GET /auth/token`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Informational status line, unused beyond logging
    #[serde(default)]
    pub message: Option<String>,

    /// Nested credential object
    pub token: TokenPayload,

    /// Expiry flag computed by the auth service
    pub is_expired: bool,

    /// Freshness boundary as an ISO-8601 string
    pub expires_at: String,

    /// Last refresh instant on the auth service side, ISO-8601
    pub last_updated: String,
}

/// Credential object nested inside the token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub token_type: String,
    /// Credential expiry as epoch milliseconds
    pub expiry_date: i64,
}

/// Error body the auth service attaches to non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl TokenErrorResponse {
    /// Best human-readable description the body offers
    pub fn detail(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "no error detail supplied".to_string())
    }
}

impl TokenResponse {
    /// Translate the wire payload into a domain token
    ///
    /// Validates the credential strings and converts the millisecond-epoch
    /// and ISO-8601 timestamps into absolute instants. Any mismatch rejects
    /// the whole payload; a partially translated token is never produced.
    pub fn into_issued(self) -> Result<IssuedToken, AuthServiceError> {
        if self.token.access_token.is_empty() {
            return Err(AuthServiceError::InvalidResponse {
                message: "empty access_token".to_string(),
            });
        }
        if self.token.refresh_token.is_empty() {
            return Err(AuthServiceError::InvalidResponse {
                message: "empty refresh_token".to_string(),
            });
        }

        let expiry_date = Utc
            .timestamp_millis_opt(self.token.expiry_date)
            .single()
            .ok_or_else(|| AuthServiceError::InvalidResponse {
                message: format!(
                    "unrepresentable expiry_date: {}",
                    self.token.expiry_date
                ),
            })?;

        let expires_at = parse_instant("expiresAt", &self.expires_at)?;
        let last_updated = parse_instant("lastUpdated", &self.last_updated)?;

        Ok(IssuedToken {
            access_token: self.token.access_token,
            refresh_token: self.token.refresh_token,
            scope: self.token.scope,
            token_type: self.token.token_type,
            expiry_date,
            is_expired: self.is_expired,
            expires_at,
            last_updated,
        })
    }
}

/// Parse an ISO-8601 timestamp field into a UTC instant
fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>, AuthServiceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AuthServiceError::InvalidResponse {
            message: format!("invalid {} timestamp '{}': {}", field, value, e),
        })
}
