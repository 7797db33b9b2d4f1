//! Mock implementation of TokenStore for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::GscToken;
use crate::errors::DomainError;

use super::r#trait::TokenStore;

/// Mock token store for testing
///
/// Backed by a `Vec` rather than a single slot so tests can observe whether
/// `replace` really leaves exactly one record behind.
pub struct MockTokenStore {
    tokens: Arc<RwLock<Vec<GscToken>>>,
}

impl MockTokenStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of records currently held
    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn find_current(&self) -> Result<Option<GscToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.first().cloned())
    }

    async fn replace(&self, token: GscToken) -> Result<GscToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.clear();
        tokens.push(token.clone());
        Ok(token)
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let removed = tokens.len() as u64;
        tokens.clear();
        Ok(removed)
    }
}
