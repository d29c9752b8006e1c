//! Shared infrastructure for the Meridian SDK crates.
//!
//! The crate currently hosts a single concern: the OAuth2
//! client-credentials token lifecycle used by every authenticated API
//! call. It is kept separate from the client crate so the auth core can
//! be tested in isolation and reused by future transport crates.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types and traits for convenience
pub use auth::{
    AcquireToken, AuthError, AuthManager, Credentials, Token, TokenAcquirer, TokenCoordinator,
    TokenResponse, TokenStore,
};
