//! Unverified bearer token payload decoding.
//!
//! The payload is read locally only to decide what to show (admin links,
//! the user id). No signature is checked here: every request carries the
//! token and the backend re-validates it, so nothing decoded here grants
//! access on its own.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::claims::TokenClaims;
use crate::error::SessionError;

/// Pad a base64url segment with `=` to a multiple of 4 characters.
pub fn pad_segment(segment: &str) -> String {
    let mut padded = segment.to_string();
    let rem = padded.len() % 4;
    if rem != 0 {
        padded.push_str(&"=".repeat(4 - rem));
    }
    padded
}

/// Decode the claims of a `header.payload.signature` token without
/// verifying its signature.
pub fn decode_payload_unverified(token: &str) -> Result<TokenClaims, SessionError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::MalformedToken {
            segments: segments.len(),
        });
    }

    let payload = URL_SAFE.decode(pad_segment(segments[1]))?;
    Ok(serde_json::from_slice(&payload)?)
}
