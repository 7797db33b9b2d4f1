//! # SearchBoost Core
//!
//! Core business logic and domain layer for the SearchBoost token cache.
//! This crate contains the cached token entity, the token cache service,
//! the store and auth service interfaces, and the error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
