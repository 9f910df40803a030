//! # folio-session
//!
//! Client session state for the Folio bookstore client.
//!
//! This crate provides functionality for:
//! - Holding the bearer token, username, user id and roles of the current user
//! - Decoding roles and the user id from the token payload
//! - Page guards (`require_auth`, `require_admin`)
//! - Consuming federated-login callbacks
//!
//! ## Trust Boundary
//!
//! Token payloads are decoded **without** signature verification. The
//! decoded roles only decide what the front end offers; the backend
//! re-validates the token on every request and is the sole authority.
//!
//! | Check | Where | Authoritative |
//! |-------|-------|---------------|
//! | `require_auth` / `require_admin` | client, before a request | No |
//! | Token signature, expiry, roles | backend, on every request | Yes |

pub mod callback;
pub mod claims;
pub mod error;
pub mod session;
pub mod token;

pub use callback::{FederatedCallback, strip_query};
pub use claims::{ROLE_ADMIN, TokenClaims};
pub use error::{GuardError, SessionError};
pub use session::{LoginResponse, Session, SessionStore};
pub use token::decode_payload_unverified;
