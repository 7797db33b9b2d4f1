//! Shared utilities and common types for the SearchBoost token cache backend
//!
//! This crate provides configuration types used across the server modules:
//! - Environment detection
//! - Database connection and pool configuration
//! - Composed application configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment};
