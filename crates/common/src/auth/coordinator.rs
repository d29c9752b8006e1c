//! Single-flight acquisition coordinator
//!
//! Guarantees at most one in-flight token exchange per coordinator,
//! regardless of how many callers need a token at once. The first caller to
//! find the gate open becomes the leader and runs the acquirer; everyone
//! arriving while the exchange is pending registers a waiter and receives
//! the leader's outcome. Waiters are notified in FIFO registration order.
//!
//! The flight state is guarded by a synchronous mutex that is never held
//! across an await point, so the check-then-register step is atomic with
//! respect to other tasks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::debug;

use super::acquirer::AcquireToken;
use super::error::AuthError;
use super::types::{Credentials, Token};

type TokenResult = Result<Token, AuthError>;

/// Gate state: either no exchange is pending, or one is and these senders
/// are the callers waiting on its outcome
enum Flight {
    Idle,
    InFlight(Vec<oneshot::Sender<TokenResult>>),
}

/// Coordinates concurrent token acquisition through a single network call
pub struct TokenCoordinator {
    acquirer: Arc<dyn AcquireToken>,
    flight: Mutex<Flight>,
}

impl TokenCoordinator {
    /// Create a coordinator around the given acquirer
    #[must_use]
    pub fn new(acquirer: Arc<dyn AcquireToken>) -> Self {
        Self { acquirer, flight: Mutex::new(Flight::Idle) }
    }

    /// Obtain the outcome of one acquisition, shared among concurrent callers
    ///
    /// Exactly one acquirer invocation happens per flight; every caller that
    /// requested during that window observes the identical token or error.
    ///
    /// # Errors
    /// Propagates the acquirer's terminal error, identically to all callers
    /// of the same flight.
    pub async fn get_or_acquire(&self, credentials: &Credentials) -> TokenResult {
        let waiter = {
            let mut flight = self.lock_flight();
            match &mut *flight {
                Flight::InFlight(waiters) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Some(rx)
                }
                state => {
                    *state = Flight::InFlight(Vec::new());
                    None
                }
            }
        };

        if let Some(rx) = waiter {
            debug!("token exchange already in flight, waiting for broadcast");
            return match rx.await {
                Ok(outcome) => outcome,
                Err(_) => {
                    Err(AuthError::Request("in-flight token exchange was abandoned".to_string()))
                }
            };
        }

        debug!("leading token exchange");
        let mut release = FlightRelease { coordinator: self, armed: true };
        let result = self.acquirer.acquire(credentials).await;
        let waiters = release.complete();

        if !waiters.is_empty() {
            debug!(waiters = waiters.len(), "broadcasting token exchange outcome");
        }
        for waiter in waiters {
            // A waiter that stopped listening is not our problem.
            let _ = waiter.send(result.clone());
        }

        result
    }

    fn lock_flight(&self) -> MutexGuard<'_, Flight> {
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_waiters(&self) -> Vec<oneshot::Sender<TokenResult>> {
        match std::mem::replace(&mut *self.lock_flight(), Flight::Idle) {
            Flight::InFlight(waiters) => waiters,
            Flight::Idle => Vec::new(),
        }
    }
}

/// Reopens the gate even if the leader's future is dropped mid-exchange;
/// the pending senders are dropped with it, which wakes every waiter with
/// an abandonment error instead of leaving them parked forever.
struct FlightRelease<'a> {
    coordinator: &'a TokenCoordinator,
    armed: bool,
}

impl FlightRelease<'_> {
    fn complete(&mut self) -> Vec<oneshot::Sender<TokenResult>> {
        self.armed = false;
        self.coordinator.take_waiters()
    }
}

impl Drop for FlightRelease<'_> {
    fn drop(&mut self) {
        if self.armed {
            drop(self.coordinator.take_waiters());
        }
    }
}
