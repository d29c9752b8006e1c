//! Token and credential types
//!
//! Defines the cached token, the wire-level token endpoint response, and the
//! read-only credentials supplied by client configuration.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A bearer token together with its absolute expiry
///
/// The expiry is computed from the authorization server's own clock
/// (`created_at + expires_in`), never from local time, so validity checks
/// agree with the server regardless of when the response was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Bearer access token for API authentication
    pub access_token: String,

    /// Absolute expiration timestamp (UTC)
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Create a token with an explicit expiry timestamp
    #[must_use]
    pub fn new(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self { access_token, expires_at }
    }

    /// Check whether the token can still be presented to the API
    ///
    /// A token is valid iff the access token is non-empty and the expiry is
    /// strictly in the future.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty() && self.expires_at > Utc::now()
    }

    /// Expiry as milliseconds since the Unix epoch
    ///
    /// For a token built from a wire response this equals
    /// `(created_at + expires_in) * 1000` exactly.
    #[must_use]
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }

    /// Seconds until expiry; negative once the token has lapsed
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

/// Token response from the authorization server
///
/// Wire format of a successful `grant_type=client_credentials` exchange:
/// `created_at` and `expires_in` are both in seconds.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub created_at: i64,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<TokenResponse> for Token {
    fn from(response: TokenResponse) -> Self {
        let expires_at = Utc
            .timestamp_opt(response.created_at + response.expires_in, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { access_token: response.access_token, expires_at }
    }
}

/// Client-credentials pair plus optional request timeout
///
/// Read-only input owned by the caller's configuration; the auth subsystem
/// never mutates it.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Per-request timeout for the token exchange
    pub timeout: Option<Duration>,
}

impl Credentials {
    /// Create credentials without a timeout override
    #[must_use]
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self { client_id, client_secret, timeout: None }
    }

    /// Set the token exchange timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
