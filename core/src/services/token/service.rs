//! Main token cache service implementation

use tracing::{debug, error, info};

use crate::domain::entities::token::GscToken;
use crate::domain::value_objects::{CachedAccessToken, TokenStatus};
use crate::errors::DomainError;
use crate::repositories::TokenStore;

use super::traits::AuthServiceTrait;

/// Service deciding when to trust the cached token and when to refetch
///
/// Layers fetch-or-reuse logic over a [`TokenStore`]: a valid cached record
/// is served without touching the network; anything else triggers a single
/// fetch from the auth service followed by a wholesale replace of the
/// stored record. There is no background task or retry loop; one fetch
/// attempt either succeeds or the whole call reports absence.
pub struct TokenCacheService<S: TokenStore, A: AuthServiceTrait> {
    pub(crate) store: S,
    pub(crate) auth_service: A,
}

impl<S: TokenStore, A: AuthServiceTrait> TokenCacheService<S, A> {
    /// Creates a new token cache service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Token store for persistence
    /// * `auth_service` - Client for the remote token-issuing service
    pub fn new(store: S, auth_service: A) -> Self {
        Self {
            store,
            auth_service,
        }
    }

    /// Returns a usable access token, from cache or freshly fetched
    ///
    /// A stored record that is still valid is returned without any network
    /// call or store write. Otherwise the auth service is contacted once
    /// and the result replaces whatever was stored. Every failure on the
    /// way is logged and mapped to `None`; callers must treat `None` as
    /// "authorization unavailable" and surface that to the operator.
    pub async fn get_token(&self) -> Option<CachedAccessToken> {
        let existing = match self.store.find_current().await {
            Ok(existing) => existing,
            Err(e) => {
                error!("Failed to read cached token: {}", e);
                return None;
            }
        };

        if let Some(token) = existing {
            if token.is_valid() {
                debug!(
                    "Token cache hit, {}s until expiry",
                    token.time_until_expiration().num_seconds()
                );
                return Some(CachedAccessToken::new(token.access_token));
            }
            info!("Cached token no longer valid, fetching fresh token from auth service");
        } else {
            info!("No cached token, fetching fresh token from auth service");
        }

        match self.fetch_and_store().await {
            Ok(token) => Some(CachedAccessToken::new(token.access_token)),
            Err(e) => {
                error!("Failed to obtain token from auth service: {}", e);
                None
            }
        }
    }

    /// Fetches a fresh token unconditionally, bypassing the validity check
    ///
    /// Used when the Search Console API itself rejects a token the cache
    /// still considers valid (clock skew, upstream revocation not yet
    /// reflected locally). Failure mapping matches
    /// [`get_token`](Self::get_token).
    pub async fn refresh_token(&self) -> Option<CachedAccessToken> {
        info!("Force refreshing token from auth service");

        match self.fetch_and_store().await {
            Ok(token) => Some(CachedAccessToken::new(token.access_token)),
            Err(e) => {
                error!("Failed to force refresh token: {}", e);
                None
            }
        }
    }

    /// Reports the authorization status for presentation purposes
    ///
    /// The freshness boundary is reported whenever a record exists, even an
    /// invalid one, so the caller can render "expired at ...". Storage
    /// errors degrade to an unauthorized status.
    pub async fn token_status(&self) -> TokenStatus {
        match self.store.find_current().await {
            Ok(Some(token)) => TokenStatus::from_token(&token),
            Ok(None) => TokenStatus::unauthorized(),
            Err(e) => {
                error!("Failed to check token status: {}", e);
                TokenStatus::unauthorized()
            }
        }
    }

    /// Removes all cached tokens
    ///
    /// Used for logout and test-reset flows. Storage failures propagate to
    /// the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of records removed
    /// * `Err(DomainError)` - Deletion failed
    pub async fn clear_tokens(&self) -> Result<u64, DomainError> {
        let removed = self.store.clear().await?;
        info!("Cleared {} cached token(s)", removed);
        Ok(removed)
    }

    /// Fetches from the auth service and replaces the stored record
    async fn fetch_and_store(&self) -> Result<GscToken, DomainError> {
        let issued = self.auth_service.fetch_token().await?;
        let stored = self.store.replace(GscToken::from_issued(&issued)).await?;

        info!("Stored fresh token, expires at {}", stored.expires_at);
        Ok(stored)
    }
}
