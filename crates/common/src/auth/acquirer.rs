//! Client-credentials token exchange
//!
//! Performs one logical acquisition against the authorization endpoint,
//! including bounded retries. Two failure classes are retried: timeout-class
//! transport errors (classified by error kind, not message text) and non-200
//! responses. Everything else fails fast.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::error::AuthError;
use super::types::{Credentials, Token, TokenResponse};

/// Total attempts per logical acquisition (initial try + retries)
const MAX_ATTEMPTS: u32 = 3;

const TOKEN_PATH: &str = "/token";

/// Pattern the platform uses to carry a failure reason in `WWW-Authenticate`
static ERROR_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"error_description="([^"]*)""#).expect("fixed pattern compiles"));

/// Trait for token acquisition
///
/// This seam lets the coordinator and tests substitute the network exchange
/// with scripted implementations.
#[async_trait]
pub trait AcquireToken: Send + Sync {
    /// Perform one logical acquisition, retries included
    ///
    /// # Errors
    /// Returns error after retry exhaustion or on a non-retryable failure.
    async fn acquire(&self, credentials: &Credentials) -> Result<Token, AuthError>;
}

/// Bounded retry bookkeeping for one acquisition chain
#[derive(Debug)]
struct RetryState {
    attempts: u32,
    max_attempts: u32,
}

impl RetryState {
    fn new(max_attempts: u32) -> Self {
        Self { attempts: 0, max_attempts }
    }

    fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    fn exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }
}

/// HTTP implementation of the client-credentials exchange
#[derive(Debug, Clone)]
pub struct TokenAcquirer {
    http: Client,
    token_url: String,
}

/// Outcome of a single network attempt, before retry policy is applied
enum AttemptError {
    /// Timeout-class transport failure; eligible for retry
    Transient(String),
    /// Non-200 from the token endpoint; eligible for retry
    Denied { status: u16, description: Option<String> },
    /// Non-retryable failure, surfaced immediately
    Fatal(AuthError),
}

impl TokenAcquirer {
    /// Create an acquirer against the given authorization base URL
    #[must_use]
    pub fn new(auth_base_url: &str) -> Self {
        Self {
            http: Client::new(),
            token_url: format!("{}{TOKEN_PATH}", auth_base_url.trim_end_matches('/')),
        }
    }

    /// Token endpoint this acquirer exchanges against
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    async fn attempt(&self, credentials: &Credentials) -> Result<Token, AttemptError> {
        let mut request = self
            .http
            .post(&self.token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")]);

        if let Some(timeout) = credentials.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            // Connect and socket timeouts both surface through is_timeout();
            // every other transport failure (refused, DNS, TLS) is terminal.
            Err(err) if err.is_timeout() => {
                return Err(AttemptError::Transient(err.to_string()));
            }
            Err(err) => return Err(AttemptError::Fatal(AuthError::Request(err.to_string()))),
        };

        let status = response.status();
        if status != StatusCode::OK {
            let description = response
                .headers()
                .get(WWW_AUTHENTICATE)
                .and_then(|value| value.to_str().ok())
                .and_then(extract_error_description);
            return Err(AttemptError::Denied { status: status.as_u16(), description });
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|err| AttemptError::Fatal(AuthError::Parse(err.to_string())))?;

        Ok(parsed.into())
    }
}

#[async_trait]
impl AcquireToken for TokenAcquirer {
    async fn acquire(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        let mut retry = RetryState::new(MAX_ATTEMPTS);

        loop {
            retry.record_attempt();

            match self.attempt(credentials).await {
                Ok(token) => {
                    debug!(attempt = retry.attempts, "token exchange succeeded");
                    return Ok(token);
                }
                Err(AttemptError::Transient(msg)) => {
                    if retry.exhausted() {
                        return Err(AuthError::Transport(msg));
                    }
                    debug!(attempt = retry.attempts, error = %msg, "token exchange timed out, retrying");
                }
                Err(AttemptError::Denied { status, description }) => {
                    if retry.exhausted() {
                        return Err(AuthError::Unauthorized { status, description });
                    }
                    debug!(attempt = retry.attempts, status, "token endpoint refused exchange, retrying");
                }
                Err(AttemptError::Fatal(err)) => return Err(err),
            }
        }
    }
}

/// Extract the `error_description` field from a `WWW-Authenticate` header
///
/// Returns `None` when the header does not match the expected pattern; the
/// resulting error message then carries only the `(error <status>)` suffix.
fn extract_error_description(header: &str) -> Option<String> {
    ERROR_DESCRIPTION.captures(header).map(|captures| captures[1].to_string())
}
