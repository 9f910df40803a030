//! # folio-client
//!
//! REST client for the bookstore API gateway.
//!
//! Every call goes through one response handler:
//!
//! | Answer | Result |
//! |--------|--------|
//! | 401 | session cleared, [`ApiError::Unauthenticated`] |
//! | other non-2xx | [`ApiError::RequestFailed`] with the body's `message` or `error` |
//! | 2xx, empty body | `{}` |
//! | 2xx, JSON body | parsed, then normalized into `folio_core` records |
//!
//! Calls to endpoints that need a bearer token check the session first and
//! fail with [`ApiError::Guard`] without touching the network.

pub mod client;
pub mod error;
pub mod requests;
pub mod response;

pub use client::ApiClient;
pub use error::{ApiError, SESSION_EXPIRED};
pub use requests::{
    BookDetails, CategoryRequest, InventoryData, InventoryRequest, LoginRequest, NewBook,
    PriceData, PriceRequest, ProfileUpdate, RegisterRequest, ReviewQuery, ReviewRequest,
    SortDirection,
};
pub use response::handle_response;
