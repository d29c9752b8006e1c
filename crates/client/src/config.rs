//! Client configuration
//!
//! Configuration is supplied in code via the builder or loaded from
//! `MERIDIAN_*` environment variables. URL syntax is validated eagerly;
//! credential presence is deliberately not — the auth subsystem reports
//! missing credentials on the first authenticated call, naming the exact
//! field(s), so a partially configured client fails with a precise error
//! instead of at construction time.

use std::fmt;
use std::time::Duration;

use meridian_common::auth::Credentials;
use meridian_domain::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use tracing::warn;
use url::Url;

use crate::api::errors::ApiError;

const ENV_API_BASE_URL: &str = "MERIDIAN_API_BASE_URL";
const ENV_AUTH_BASE_URL: &str = "MERIDIAN_AUTH_BASE_URL";
const ENV_CLIENT_ID: &str = "MERIDIAN_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "MERIDIAN_CLIENT_SECRET";
const ENV_TIMEOUT_SECS: &str = "MERIDIAN_TIMEOUT_SECS";

/// Configuration for one SDK client (one credential set)
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the resource API
    pub api_base_url: String,
    /// Base URL of the authorization server
    pub auth_base_url: String,
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Timeout applied to API requests and the token exchange
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Manual Debug: the client secret must never end up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("auth_base_url", &self.auth_base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from `MERIDIAN_*` environment variables
    ///
    /// Unset URL variables fall back to the platform defaults; unset
    /// credentials are left empty and reported on first use.
    ///
    /// # Errors
    /// Returns `ApiError::Config` when a set variable has an invalid value.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut builder = Self::builder();

        if let Ok(value) = std::env::var(ENV_API_BASE_URL) {
            builder = builder.api_base_url(value);
        }
        if let Ok(value) = std::env::var(ENV_AUTH_BASE_URL) {
            builder = builder.auth_base_url(value);
        }
        if let Ok(value) = std::env::var(ENV_CLIENT_ID) {
            builder = builder.client_id(value);
        }
        if let Ok(value) = std::env::var(ENV_CLIENT_SECRET) {
            builder = builder.client_secret(value);
        }
        if let Ok(value) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = value
                .parse()
                .map_err(|e| ApiError::Config(format!("invalid {ENV_TIMEOUT_SECS}: {e}")))?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Credentials view consumed by the auth subsystem
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            timeout: Some(self.timeout),
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base_url: Option<String>,
    auth_base_url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the resource API base URL
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the authorization server base URL
    #[must_use]
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into());
        self
    }

    /// Set the OAuth client id
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the OAuth client secret
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    /// Returns `ApiError::Config` when a base URL does not parse.
    pub fn build(self) -> Result<ClientConfig, ApiError> {
        let defaults = ClientConfig::default();
        let config = ClientConfig {
            api_base_url: self.api_base_url.unwrap_or(defaults.api_base_url),
            auth_base_url: self.auth_base_url.unwrap_or(defaults.auth_base_url),
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        };

        validate_url("api_base_url", &config.api_base_url)?;
        validate_url("auth_base_url", &config.auth_base_url)?;

        if config.client_id.is_empty() || config.client_secret.is_empty() {
            warn!("client credentials incomplete; authenticated calls will fail");
        }

        Ok(config)
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ApiError> {
    Url::parse(value).map_err(|e| ApiError::Config(format!("invalid {field} \"{value}\": {e}")))?;
    Ok(())
}
