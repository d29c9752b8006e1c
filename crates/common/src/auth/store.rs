//! In-memory token cache
//!
//! The store is the only shared mutable state in the auth subsystem. It is
//! written by the manager's success path and by explicit invalidation, never
//! by the acquirer or the coordinator. The lock is held only for copy-in /
//! copy-out, never across an await point.

use std::sync::Mutex;

use super::types::Token;

/// Shared slot holding the current token, if any
#[derive(Debug, Default)]
pub struct TokenStore {
    current: Mutex<Option<Token>>,
}

impl TokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, valid or not
    #[must_use]
    pub fn get(&self) -> Option<Token> {
        self.lock().clone()
    }

    /// Current token only if it is still presentable to the API
    #[must_use]
    pub fn valid_token(&self) -> Option<Token> {
        self.lock().clone().filter(Token::is_valid)
    }

    /// Replace the current token
    pub fn set(&self, token: Token) {
        *self.lock() = Some(token);
    }

    /// Clear the store; idempotent
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    /// Clear the store only if the cached access token still equals `used`
    ///
    /// Returns `true` when the store was cleared. A mismatch means a
    /// concurrent refresh already replaced the token the failed request was
    /// sent with, and the fresh token must not be discarded.
    pub fn invalidate_if_matches(&self, used: &str) -> bool {
        let mut current = self.lock();
        match current.as_ref() {
            Some(token) if token.access_token == used => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Token>> {
        // A poisoned lock means a panic while holding it; the slot itself is
        // always in a consistent state, so keep serving it.
        self.current.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
