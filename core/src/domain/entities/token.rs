//! Token entity for the Search Console authorization cache.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::IssuedToken;

/// Cached Search Console OAuth token stored in the database
///
/// At most one `GscToken` exists at any time. A record is created only from
/// a successful auth service fetch, superseded wholesale by the next fetch,
/// and removed by an explicit clear. Fields are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GscToken {
    /// Unique identifier for the stored record
    pub id: Uuid,

    /// Opaque bearer credential for Search Console API calls
    pub access_token: String,

    /// Credential the auth service uses to mint new access tokens
    pub refresh_token: String,

    /// Granted permission scopes, informational only
    pub scope: String,

    /// Credential scheme label (e.g. "Bearer"), informational only
    pub token_type: String,

    /// Instant the underlying Google credential itself expires
    pub expiry_date: DateTime<Utc>,

    /// Expiry flag reported by the auth service at fetch time.
    /// A snapshot; never recomputed locally.
    pub is_expired: bool,

    /// Authoritative local freshness boundary. May differ from
    /// `expiry_date`; the auth service computes it with its own margin.
    pub expires_at: DateTime<Utc>,

    /// Instant the record was last written
    pub last_updated: DateTime<Utc>,
}

impl GscToken {
    /// Creates a token record from a translated auth service response
    ///
    /// # Arguments
    ///
    /// * `issued` - The token payload obtained from the auth service
    ///
    /// # Returns
    ///
    /// A new `GscToken` instance with a fresh record id
    pub fn from_issued(issued: &IssuedToken) -> Self {
        Self {
            id: Uuid::new_v4(),
            access_token: issued.access_token.clone(),
            refresh_token: issued.refresh_token.clone(),
            scope: issued.scope.clone(),
            token_type: issued.token_type.clone(),
            expiry_date: issued.expiry_date,
            is_expired: issued.is_expired,
            expires_at: issued.expires_at,
            last_updated: issued.last_updated,
        }
    }

    /// Checks if the cached token is still usable
    ///
    /// A token is valid when its freshness boundary is strictly in the
    /// future and the auth service did not flag it as expired. Both
    /// conditions are required; the service may flag expiry independently
    /// of the timestamp (e.g. upstream revocation).
    ///
    /// # Returns
    ///
    /// `true` if the token is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now() && !self.is_expired
    }

    /// Gets the time remaining until the freshness boundary
    ///
    /// # Returns
    ///
    /// A `Duration` representing the time until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
