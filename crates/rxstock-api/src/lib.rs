//! Typed HTTP client for the pharmacy inventory backend.
//!
//! The backend wraps most responses in a `{success, data, error, message}`
//! envelope but returns bare payloads from a handful of endpoints;
//! [`classify`] handles both shapes through one ordered decode strategy.
//! [`ApiClient`] owns URL construction, conditional auth header injection,
//! and the mapping from transport failures to [`ApiError`].

pub mod auth;
pub mod classify;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod requests;
pub mod types;

pub use auth::{StaticTokens, TokenProvider};
pub use classify::{classify, classify_empty, Decoded};
pub use client::{ApiClient, SESSION_TOKEN_HEADER};
pub use endpoint::Endpoint;
pub use error::ApiError;
