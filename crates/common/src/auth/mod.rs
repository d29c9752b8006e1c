//! OAuth2 client-credentials token lifecycle
//!
//! This module owns the acquisition, caching, invalidation, and refresh of
//! the bearer token used on every authenticated API call. Concurrent callers
//! never race the token endpoint: acquisition is single-flight, with one
//! leader performing the network exchange and all other callers waiting on
//! the broadcast of the same outcome.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   AuthManager    │  Public entry point (get_token / invalidate)
//! └────────┬─────────┘
//!          │
//!          ├──► TokenStore        (cached token + expiry)
//!          │
//!          └──► TokenCoordinator  (single-flight gate + waiter broadcast)
//!                    │
//!                    └──► TokenAcquirer  (HTTP exchange + bounded retry)
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: `Token`, `TokenResponse`, `Credentials`
//! - **[`store`]**: in-memory token cache
//! - **[`acquirer`]**: client-credentials exchange with bounded retry
//! - **[`coordinator`]**: single-flight coordination
//! - **[`manager`]**: the facade wiring the pieces together
//! - **[`error`]**: error taxonomy shared by all of the above
//!
//! One `AuthManager` exists per SDK client instance; there is no
//! process-wide token state.

pub mod acquirer;
pub mod coordinator;
pub mod error;
pub mod manager;
pub mod store;
pub mod types;

// Re-export commonly used types and functions
pub use acquirer::{AcquireToken, TokenAcquirer};
pub use coordinator::TokenCoordinator;
pub use error::AuthError;
pub use manager::AuthManager;
pub use store::TokenStore;
pub use types::{Credentials, Token, TokenResponse};
