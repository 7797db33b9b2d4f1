//! Auth service integration
//!
//! HTTP client for the remote token-issuing service that owns the actual
//! Google Search Console credentials. The service exposes a single token
//! endpoint for a fixed default principal; no caller identity is sent.

pub mod client;
pub mod dto;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{AuthServiceConfig, HttpAuthService};
pub use dto::{TokenErrorResponse, TokenResponse};
