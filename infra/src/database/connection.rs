//! Connection pool management for MySQL

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, info};

use gsc_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Managed MySQL connection pool
pub struct DatabasePool {
    pool: MySqlPool,
    max_connections: u32,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    ///
    /// # Arguments
    /// * `config` - Database connection and pool settings
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - Pool connected to the configured database
    /// * `Err(InfrastructureError)` - Invalid URL or unreachable database
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        debug!(
            "Creating MySQL pool (max {} connections)",
            config.max_connections
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await?;

        info!("MySQL connection pool established");

        Ok(Self {
            pool,
            max_connections: config.max_connections,
        })
    }

    /// Access the underlying SQLx pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Verify the database is reachable
    ///
    /// # Returns
    /// * `Ok(true)` - The database answered a probe query
    /// * `Err(InfrastructureError)` - The probe failed
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }

    /// Snapshot of the pool's connection usage
    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle() as u32,
            max_connections: self.max_connections,
        }
    }
}

/// Connection usage counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    /// Currently open connections
    pub connections: u32,
    /// Open connections not serving a query
    pub idle_connections: u32,
    /// Configured pool ceiling
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
