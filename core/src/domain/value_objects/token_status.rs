//! Token views returned to callers of the cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::token::GscToken;

/// Access token view returned from `get_token` / `refresh_token`
///
/// `is_expired` is always false on the success path; a token that could not
/// be served fresh is reported as absence instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedAccessToken {
    /// Bearer credential to present to the Search Console API
    pub access_token: String,

    /// Whether the credential was already expired when served
    pub is_expired: bool,
}

impl CachedAccessToken {
    /// Creates a view over a fresh or validated credential
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            is_expired: false,
        }
    }
}

/// Authorization status for presentation purposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatus {
    /// Whether a valid token is currently cached
    pub is_authorized: bool,

    /// Freshness boundary of the stored record, populated even when the
    /// record is no longer valid so the caller can render "expired at ..."
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenStatus {
    /// Status reported when no record exists or storage is unreachable
    pub fn unauthorized() -> Self {
        Self {
            is_authorized: false,
            expires_at: None,
        }
    }

    /// Creates a status from a stored token record
    ///
    /// # Arguments
    ///
    /// * `token` - The currently stored token
    ///
    /// # Returns
    ///
    /// A `TokenStatus` carrying the record's validity and freshness boundary
    pub fn from_token(token: &GscToken) -> Self {
        Self {
            is_authorized: token.is_valid(),
            expires_at: Some(token.expires_at),
        }
    }
}
