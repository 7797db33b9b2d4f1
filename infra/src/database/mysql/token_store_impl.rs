//! MySQL implementation of the TokenStore trait.
//!
//! This module provides the concrete implementation of token cache
//! persistence using MySQL with SQLx. The cache holds at most one row in
//! the `gsc_tokens` table:
//!
//! ```sql
//! CREATE TABLE gsc_tokens (
//!     id            CHAR(36)    NOT NULL PRIMARY KEY,
//!     access_token  TEXT        NOT NULL,
//!     refresh_token TEXT        NOT NULL,
//!     scope         TEXT        NOT NULL,
//!     token_type    VARCHAR(32) NOT NULL,
//!     expiry_date   DATETIME(3) NOT NULL,
//!     is_expired    BOOLEAN     NOT NULL,
//!     expires_at    DATETIME(3) NOT NULL,
//!     last_updated  DATETIME(3) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gsc_core::domain::entities::token::GscToken;
use gsc_core::errors::DomainError;
use gsc_core::repositories::TokenStore;

/// MySQL implementation of TokenStore
pub struct MySqlTokenStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenStore {
    /// Create a new MySQL token store
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    ///
    /// # Returns
    /// A new instance of MySqlTokenStore
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to GscToken entity
    ///
    /// Maps database columns to GscToken struct fields
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<GscToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(GscToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid token UUID: {}", e),
            })?,
            access_token: row.try_get("access_token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get access_token: {}", e),
            })?,
            refresh_token: row.try_get("refresh_token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get refresh_token: {}", e),
            })?,
            scope: row.try_get("scope").map_err(|e| DomainError::Internal {
                message: format!("Failed to get scope: {}", e),
            })?,
            token_type: row.try_get("token_type").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token_type: {}", e),
            })?,
            expiry_date: row
                .try_get::<DateTime<Utc>, _>("expiry_date")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expiry_date: {}", e),
                })?,
            is_expired: row.try_get("is_expired").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_expired: {}", e),
            })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            last_updated: row
                .try_get::<DateTime<Utc>, _>("last_updated")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get last_updated: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl TokenStore for MySqlTokenStore {
    async fn find_current(&self) -> Result<Option<GscToken>, DomainError> {
        let query = r#"
            SELECT id, access_token, refresh_token, scope, token_type,
                   expiry_date, is_expired, expires_at, last_updated
            FROM gsc_tokens
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read cached token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, token: GscToken) -> Result<GscToken, DomainError> {
        // Delete and insert commit together so a concurrent reader never
        // observes an empty or double-populated table.
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to start token replace transaction: {}", e),
        })?;

        sqlx::query("DELETE FROM gsc_tokens")
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to remove previous token: {}", e),
            })?;

        let query = r#"
            INSERT INTO gsc_tokens (
                id, access_token, refresh_token, scope, token_type,
                expiry_date, is_expired, expires_at, last_updated
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(&token.access_token)
            .bind(&token.refresh_token)
            .bind(&token.scope)
            .bind(&token.token_type)
            .bind(token.expiry_date)
            .bind(token.is_expired)
            .bind(token.expires_at)
            .bind(token.last_updated)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save token: {}", e),
            })?;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit token replace: {}", e),
        })?;

        Ok(token)
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM gsc_tokens")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clear tokens: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
