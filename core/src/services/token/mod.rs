//! Token cache service module
//!
//! This module handles the Search Console token lifecycle:
//! - Cache-or-fetch decision logic for access tokens
//! - Forced refresh for when Search Console rejects a locally valid token
//! - Authorization status queries for the presentation layer
//! - Cache clearing for logout and test-reset flows

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::TokenCacheService;
pub use traits::AuthServiceTrait;
