//! # Meridian Client
//!
//! Typed Rust client for the Meridian rewards platform API. Authentication
//! is handled transparently: the client exchanges its OAuth2 client
//! credentials for a bearer token on first use, caches it until expiry,
//! coordinates concurrent refreshes through a single network exchange, and
//! recovers from a revoked token with a single retry.
//!
//! # Usage Example
//!
//! ```no_run
//! use meridian_client::{ClientConfig, MeridianClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .client_id("your_client_id")
//!         .client_secret("your_client_secret")
//!         .build()?;
//!     let client = MeridianClient::new(&config)?;
//!
//!     let programs = client.programs().list(None).await?;
//!     for program in &programs.data {
//!         println!("{}: {}", program.id, program.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod api;
pub mod config;
pub mod resources;

use meridian_common::auth::AuthManager;

pub use api::{ApiClient, ApiError, ApiErrorCategory};
pub use config::{ClientConfig, ClientConfigBuilder};
// Re-export the auth surface SDK consumers interact with
pub use meridian_common::auth::{AuthError, Token};
use resources::{
    Coupons, Items, Members, Orders, Personalization, Programs, Rewards, Subsegments,
};

/// Entry point of the SDK: one client per credential set
///
/// The client owns exactly one [`AuthManager`]; its cached token is shared
/// by every resource accessor obtained from it.
pub struct MeridianClient {
    api: ApiClient,
}

impl MeridianClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the transport cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self { api: ApiClient::new(config)? })
    }

    /// Create a client from `MERIDIAN_*` environment variables
    ///
    /// # Errors
    /// Returns `ApiError::Config` when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Token lifecycle manager backing this client
    #[must_use]
    pub fn auth(&self) -> &AuthManager {
        self.api.auth()
    }

    /// Program endpoints
    #[must_use]
    pub fn programs(&self) -> Programs<'_> {
        Programs { api: &self.api }
    }

    /// Catalog item endpoints
    #[must_use]
    pub fn items(&self) -> Items<'_> {
        Items { api: &self.api }
    }

    /// Reward endpoints
    #[must_use]
    pub fn rewards(&self) -> Rewards<'_> {
        Rewards { api: &self.api }
    }

    /// Order endpoints
    #[must_use]
    pub fn orders(&self) -> Orders<'_> {
        Orders { api: &self.api }
    }

    /// Coupon endpoints
    #[must_use]
    pub fn coupons(&self) -> Coupons<'_> {
        Coupons { api: &self.api }
    }

    /// Member endpoints
    #[must_use]
    pub fn members(&self) -> Members<'_> {
        Members { api: &self.api }
    }

    /// Subsegment endpoints
    #[must_use]
    pub fn subsegments(&self) -> Subsegments<'_> {
        Subsegments { api: &self.api }
    }

    /// Personalization endpoints
    #[must_use]
    pub fn personalization(&self) -> Personalization<'_> {
        Personalization { api: &self.api }
    }
}
