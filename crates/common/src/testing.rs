//! Test doubles shared by the unit tests in this crate

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{AcquireToken, AuthError, Credentials, Token};

/// Scripted acquirer: pops pre-loaded outcomes in order and counts calls
///
/// An optional delay keeps the exchange "in flight" long enough for
/// concurrency tests to pile waiters onto it.
#[derive(Default)]
pub(crate) struct MockAcquirer {
    responses: Mutex<VecDeque<Result<Token, AuthError>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockAcquirer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn ok(self, token: Token) -> Self {
        self.responses.lock().unwrap().push_back(Ok(token));
        self
    }

    pub(crate) fn err(self, error: AuthError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AcquireToken for MockAcquirer {
    async fn acquire(&self, _credentials: &Credentials) -> Result<Token, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Request("mock acquirer exhausted".to_string())))
    }
}
