//! Token store trait defining the interface for token cache persistence.

use async_trait::async_trait;

use crate::domain::entities::token::GscToken;
use crate::errors::DomainError;

/// Repository trait for the single cached Search Console token
///
/// This trait defines the contract for the one-slot backing store of the
/// token cache. Implementations hold at most one record; `replace` swaps
/// the whole slot rather than updating fields in place, so there is no
/// partial or mixed-generation state.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the currently stored token
    ///
    /// # Returns
    /// * `Ok(Some(GscToken))` - A record is stored
    /// * `Ok(None)` - No record exists; absence is a normal state, not a failure
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use gsc_core::repositories::TokenStore;
    /// # async fn example(store: &impl TokenStore) -> Result<(), Box<dyn std::error::Error>> {
    /// match store.find_current().await? {
    ///     Some(token) => println!("Token expires at {}", token.expires_at),
    ///     None => println!("Cache is empty"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_current(&self) -> Result<Option<GscToken>, DomainError>;

    /// Replace any stored record with the given one
    ///
    /// Removes every existing record and inserts `token` as the sole record
    /// in one atomic step; after a successful call exactly one record
    /// exists.
    ///
    /// # Arguments
    /// * `token` - The GscToken entity to persist
    ///
    /// # Returns
    /// * `Ok(GscToken)` - The stored token
    /// * `Err(DomainError)` - Replace failed; the previous record is kept
    ///
    /// # Example
    /// ```no_run
    /// # use gsc_core::repositories::TokenStore;
    /// # use gsc_core::domain::entities::token::GscToken;
    /// # async fn example(store: &impl TokenStore, token: GscToken) -> Result<(), Box<dyn std::error::Error>> {
    /// let saved = store.replace(token).await?;
    /// println!("Token stored, expires at {}", saved.expires_at);
    /// # Ok(())
    /// # }
    /// ```
    async fn replace(&self, token: GscToken) -> Result<GscToken, DomainError>;

    /// Delete all stored records
    ///
    /// Idempotent; clearing an empty store is a no-op.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records removed
    /// * `Err(DomainError)` - Deletion failed
    async fn clear(&self) -> Result<u64, DomainError>;

    /// Check if a stored token exists and is valid
    ///
    /// # Returns
    /// * `Ok(true)` - A record exists and is still usable
    /// * `Ok(false)` - No record, or the record is expired
    /// * `Err(DomainError)` - Database error occurred
    async fn has_valid_token(&self) -> Result<bool, DomainError> {
        match self.find_current().await? {
            Some(token) => Ok(token.is_valid()),
            None => Ok(false),
        }
    }
}
