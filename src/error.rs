//! Crate error types
//!
//! Errors surfaced when opening a push stream. Event-level problems
//! (malformed payloads) are not errors: they are logged and dropped by the
//! dispatch layer without disturbing the session.

/// Error type for push stream operations
#[derive(Debug)]
pub enum Error {
    /// The configured root URL is empty or not an http(s) URL
    InvalidUrl(String),
    /// The connection to the subscription endpoint could not be established
    Connect(reqwest::Error),
    /// The subscription endpoint answered with a non-success status
    SubscriptionRejected(reqwest::StatusCode),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidUrl(url) => write!(f, "Invalid root URL: {}", url),
            Error::Connect(err) => write!(f, "Failed to connect to push endpoint: {}", err),
            Error::SubscriptionRejected(status) => {
                write!(f, "Subscription rejected with status: {}", status)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connect(err) => Some(err),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
