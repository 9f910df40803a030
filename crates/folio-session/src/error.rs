//! Error types for the session crate.

use thiserror::Error;

/// Errors that can occur while decoding a bearer token payload.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token is not `header.payload.signature`.
    #[error("malformed token: expected 3 segments, found {segments}")]
    MalformedToken { segments: usize },

    /// Payload segment is not valid base64url.
    #[error("failed to decode token payload: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),

    /// Payload is not the expected JSON object.
    #[error("failed to parse token payload: {0}")]
    PayloadJson(#[from] serde_json::Error),
}

/// A page guard that was not satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    /// No bearer token in the session.
    #[error("Please login to access this page")]
    LoginRequired,

    /// Authenticated, but `ROLE_ADMIN` is missing.
    #[error("Admin access required")]
    Forbidden,
}
