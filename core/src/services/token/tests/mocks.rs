//! Mock collaborators for token cache service tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::entities::token::GscToken;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{AuthServiceError, DomainError};
use crate::repositories::TokenStore;
use crate::services::token::AuthServiceTrait;

/// Mock auth service returning a canned response and counting calls
pub(super) struct MockAuthService {
    issued: Option<IssuedToken>,
    fail_status: Option<u16>,
    calls: AtomicUsize,
}

impl MockAuthService {
    /// Mock that answers every fetch with the given token
    pub(super) fn succeeding(issued: IssuedToken) -> Self {
        Self {
            issued: Some(issued),
            fail_status: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every fetch with the given upstream status
    pub(super) fn failing(status: u16) -> Self {
        Self {
            issued: None,
            fail_status: Some(status),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches the service issued against the mock
    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthServiceTrait for MockAuthService {
    async fn fetch_token(&self) -> Result<IssuedToken, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_status {
            return Err(AuthServiceError::UpstreamStatus {
                status,
                message: "Internal server error".to_string(),
            }
            .into());
        }

        Ok(self
            .issued
            .clone()
            .expect("mock configured without a response"))
    }
}

/// Store whose every operation fails, for degraded-storage paths
pub(super) struct FailingTokenStore;

#[async_trait]
impl TokenStore for FailingTokenStore {
    async fn find_current(&self) -> Result<Option<GscToken>, DomainError> {
        Err(DomainError::Internal {
            message: "connection refused".to_string(),
        })
    }

    async fn replace(&self, _token: GscToken) -> Result<GscToken, DomainError> {
        Err(DomainError::Internal {
            message: "connection refused".to_string(),
        })
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        Err(DomainError::Internal {
            message: "connection refused".to_string(),
        })
    }
}

/// Builds an issued token whose freshness boundary is `expires_in` from now
pub(super) fn issued_token(access_token: &str, expires_in: Duration) -> IssuedToken {
    let now = Utc::now();
    IssuedToken {
        access_token: access_token.to_string(),
        refresh_token: "1//test-refresh".to_string(),
        scope: "https://www.googleapis.com/auth/webmasters.readonly".to_string(),
        token_type: "Bearer".to_string(),
        expiry_date: now + expires_in,
        is_expired: false,
        expires_at: now + expires_in,
        last_updated: now,
    }
}

/// Builds a storable record with the given freshness horizon
pub(super) fn stored_token(access_token: &str, expires_in: Duration) -> GscToken {
    GscToken::from_issued(&issued_token(access_token, expires_in))
}
