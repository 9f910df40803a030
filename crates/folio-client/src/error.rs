//! Error types for the gateway client.

use folio_session::GuardError;
use thiserror::Error;

/// User-facing message for a rejected session.
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Errors returned by every [`crate::ApiClient`] method.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared.
    #[error("Session expired. Please login again.")]
    Unauthenticated,

    /// Any other non-2xx answer.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Registration was answered with a redirect, which means the auth
    /// service is misconfigured.
    #[error(
        "Registration endpoint returned a redirect (HTTP {status}). Please restart the auth-service and try again."
    )]
    UnexpectedRedirect { status: u16 },

    /// Rejected locally before any request was sent.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Connection, timeout or TLS failure.
    #[error("could not reach the gateway: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx answer whose body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid gateway URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status of a failed request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated => Some(401),
            ApiError::RequestFailed { status, .. } | ApiError::UnexpectedRedirect { status } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}
