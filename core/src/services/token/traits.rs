//! Trait for auth service integration

use async_trait::async_trait;

use crate::domain::value_objects::IssuedToken;
use crate::errors::DomainError;

/// Trait for the remote token-issuing service
///
/// The auth service owns the actual Google credentials for a fixed default
/// principal; this cache only stores its output. A fetch either yields a
/// fully populated token or an error, never a partial payload.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Fetch a fresh token from the auth service
    async fn fetch_token(&self) -> Result<IssuedToken, DomainError>;
}
