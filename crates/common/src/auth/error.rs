//! Error taxonomy for the token lifecycle
//!
//! Errors are `Clone` because a single acquisition outcome is broadcast to
//! every caller waiting on the in-flight exchange.

/// Error type for token lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Required credentials are not configured; names the missing field(s)
    MissingCredentials(String),

    /// Timeout-class network failure, surfaced after retries are exhausted
    Transport(String),

    /// Token endpoint rejected the exchange after retries were exhausted
    Unauthorized { status: u16, description: Option<String> },

    /// Non-retryable request failure (DNS, TLS, malformed request, ...)
    Request(String),

    /// Token endpoint returned 200 with a body we could not parse
    Parse(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials(fields) => {
                write!(f, "missing credentials: {fields}")
            }
            Self::Transport(msg) => write!(f, "{msg}"),
            Self::Unauthorized { status, description } => match description {
                Some(desc) => write!(f, "{desc} (error {status})"),
                None => write!(f, "(error {status})"),
            },
            Self::Request(msg) => write!(f, "request error: {msg}"),
            Self::Parse(msg) => write!(f, "token response parse error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}
