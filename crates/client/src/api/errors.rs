//! API-specific error types
//!
//! Provides error classification for API operations with retry metadata.

use std::time::Duration;

use meridian_common::auth::AuthError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retry after token refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    #[must_use]
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }
}

/// Fold token lifecycle failures into the API error taxonomy
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::MissingCredentials(_) => Self::Config(err.to_string()),
            AuthError::Unauthorized { .. } => Self::Auth(err.to_string()),
            AuthError::Transport(_) | AuthError::Request(_) => Self::Network(err.to_string()),
            AuthError::Parse(_) => Self::Client(err.to_string()),
        }
    }
}
