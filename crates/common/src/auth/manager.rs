//! Token lifecycle facade
//!
//! `AuthManager` is the single entry point the request pipeline uses to turn
//! configured credentials into a presentable bearer token. It owns the token
//! cache and the single-flight coordinator; one manager exists per SDK
//! client instance, so there is no process-wide token state.

use std::sync::Arc;

use tracing::{debug, info};

use super::acquirer::{AcquireToken, TokenAcquirer};
use super::coordinator::TokenCoordinator;
use super::error::AuthError;
use super::store::TokenStore;
use super::types::{Credentials, Token};

/// Acquires, caches, and invalidates the bearer token for one client
pub struct AuthManager {
    credentials: Credentials,
    store: TokenStore,
    coordinator: TokenCoordinator,
}

impl AuthManager {
    /// Create a manager exchanging credentials against the given
    /// authorization base URL
    #[must_use]
    pub fn new(auth_base_url: &str, credentials: Credentials) -> Self {
        Self::with_acquirer(credentials, Arc::new(TokenAcquirer::new(auth_base_url)))
    }

    /// Create a manager around a custom acquirer implementation
    #[must_use]
    pub fn with_acquirer(credentials: Credentials, acquirer: Arc<dyn AcquireToken>) -> Self {
        Self { credentials, store: TokenStore::new(), coordinator: TokenCoordinator::new(acquirer) }
    }

    /// Get a valid access token, acquiring one if necessary
    ///
    /// Fast path: a cached, unexpired token is returned without touching the
    /// network or the single-flight gate. Otherwise the call joins (or
    /// leads) the in-flight exchange; on success the fresh token is cached
    /// before being returned, on failure the cache is left untouched.
    ///
    /// # Errors
    /// - [`AuthError::MissingCredentials`] when `client_id` and/or
    ///   `client_secret` are not configured (checked before anything else)
    /// - the acquirer's terminal error otherwise
    pub async fn get_token(&self) -> Result<String, AuthError> {
        self.ensure_credentials()?;

        if let Some(token) = self.store.valid_token() {
            debug!("using cached access token");
            return Ok(token.access_token);
        }

        let token = self.coordinator.get_or_acquire(&self.credentials).await?;
        self.store.set(token.clone());
        info!(expires_in = token.seconds_until_expiry(), "access token refreshed");
        Ok(token.access_token)
    }

    /// Drop the cached token unconditionally
    pub fn invalidate(&self) {
        debug!("access token invalidated");
        self.store.invalidate();
    }

    /// Drop the cached token only if it is still the one a failed request
    /// was sent with
    ///
    /// Returns `true` when the cache was cleared. Protects a token that a
    /// concurrent refresh already replaced from being discarded by a stale
    /// 401.
    pub fn invalidate_if_current(&self, used: &str) -> bool {
        let invalidated = self.store.invalidate_if_matches(used);
        if invalidated {
            debug!("rejected access token invalidated");
        } else {
            debug!("rejected access token already replaced, cache kept");
        }
        invalidated
    }

    /// Pre-load a token, e.g. one restored by the embedding application
    pub fn cache_token(&self, token: Token) {
        self.store.set(token);
    }

    /// Currently cached token, valid or not
    #[must_use]
    pub fn current_token(&self) -> Option<Token> {
        self.store.get()
    }

    /// Whether a valid token is currently cached
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.valid_token().is_some()
    }

    /// Seconds until the cached token expires, if one is cached
    #[must_use]
    pub fn expires_in_secs(&self) -> Option<i64> {
        self.store.get().map(|token| token.seconds_until_expiry())
    }

    /// Fail fast when credentials are not configured, naming exactly the
    /// missing field(s)
    fn ensure_credentials(&self) -> Result<(), AuthError> {
        let id_missing = self.credentials.client_id.is_empty();
        let secret_missing = self.credentials.client_secret.is_empty();

        match (id_missing, secret_missing) {
            (false, false) => Ok(()),
            (true, true) => Err(AuthError::MissingCredentials(
                "client_id and client_secret are not configured".to_string(),
            )),
            (true, false) => {
                Err(AuthError::MissingCredentials("client_id is not configured".to_string()))
            }
            (false, true) => {
                Err(AuthError::MissingCredentials("client_secret is not configured".to_string()))
            }
        }
    }
}
