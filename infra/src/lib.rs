//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SearchBoost token
//! cache, following Clean Architecture principles. It provides concrete
//! implementations for database access and the remote auth service.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL token store implementation using SQLx
//! - **Auth API**: reqwest client for the token-issuing service
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use gsc_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Auth service module - HTTP client for the token-issuing service
pub mod auth_api;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles:
    //! - Database connection settings
    //! - Auth service endpoint and timeouts
    //! - Environment-specific settings

    use gsc_shared::config::DatabaseConfig;

    use crate::auth_api::AuthServiceConfig;

    /// Infrastructure configuration settings
    #[derive(Debug, Clone)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Auth service configuration
        pub auth_service: AuthServiceConfig,
    }
}

/// Fully wired token cache service backed by MySQL and the HTTP auth client
#[cfg(feature = "mysql")]
pub type GscTokenService =
    gsc_core::services::TokenCacheService<database::MySqlTokenStore, auth_api::HttpAuthService>;

/// Initialize infrastructure services with async runtime
///
/// This function sets up:
/// - The database connection pool
/// - The auth service HTTP client
/// - A process-wide token cache service wired from both
///
/// Configuration errors (missing `AUTH_SERVICE_BASE_URL`, unreachable
/// database) surface here, at startup, never from the token operations
/// themselves.
#[cfg(feature = "mysql")]
pub async fn initialize() -> Result<GscTokenService, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let config = load_config()?;

    let pool = database::DatabasePool::new(&config.database).await?;
    let store = database::MySqlTokenStore::new(pool.pool().clone());
    let auth_client = auth_api::HttpAuthService::new(config.auth_service)?;

    tracing::info!("Infrastructure services initialized successfully");

    Ok(gsc_core::services::TokenCacheService::new(store, auth_client))
}

/// Load infrastructure configuration from environment
#[cfg(feature = "mysql")]
fn load_config() -> Result<config::InfrastructureConfig, InfrastructureError> {
    let environment = gsc_shared::config::Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok(); // Load .env file if present

    tracing::debug!("Loading configuration for {} environment", environment);

    let app = gsc_shared::config::AppConfig::from_env();
    let auth_service = auth_api::AuthServiceConfig::from_env()?;

    Ok(config::InfrastructureConfig {
        database: app.database,
        auth_service,
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
