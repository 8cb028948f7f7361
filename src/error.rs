//! Error taxonomy for API calls.
//!
//! Every failed call resolves to exactly one [`ApiError`] variant. The only
//! implicit side effect anywhere in the crate is the session-expiry
//! broadcast that precedes [`ApiError::Unauthorized`]; everything else is a
//! plain typed return. The crate never formats user-facing text, and it
//! never retries on the caller's behalf.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by the request layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL, path, and query could not form a valid URL, or a header
    /// value was malformed. A configuration/programmer error, not a
    /// server-side one.
    #[error("invalid request URL")]
    InvalidUrl,

    /// The server answered outside the success range (and not 401).
    /// `message` is the response body decoded as lossy UTF-8 text.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// Transport-level failure (DNS, TLS, timeout, connection reset)
    /// before a status code was obtained.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The server rejected the session with 401. The session-expiry
    /// channel has already fired by the time this is returned.
    #[error("session expired")]
    Unauthorized,
}

impl ApiError {
    /// Numeric status code for server-reported failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}
