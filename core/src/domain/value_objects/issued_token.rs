//! Issued token value object carrying a translated auth service response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token payload obtained from the auth service with all timestamps already
/// translated into absolute instants
///
/// Produced by the auth service client after validating the wire response.
/// A failed fetch never yields a partially populated value; either every
/// field translated or the fetch reported an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Opaque bearer credential for Search Console API calls
    pub access_token: String,

    /// Credential the auth service uses to mint new access tokens
    pub refresh_token: String,

    /// Granted permission scopes
    pub scope: String,

    /// Credential scheme label (e.g. "Bearer")
    pub token_type: String,

    /// Instant the underlying Google credential expires, from the
    /// service's millisecond-epoch timestamp
    pub expiry_date: DateTime<Utc>,

    /// Expiry flag computed by the auth service at fetch time
    pub is_expired: bool,

    /// Freshness boundary computed by the auth service
    pub expires_at: DateTime<Utc>,

    /// Last refresh instant on the auth service side
    pub last_updated: DateTime<Utc>,
}
