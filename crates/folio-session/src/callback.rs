//! Federated-login callback handling.
//!
//! After a successful Google login the auth service redirects the browser
//! back to the front end with `token`, `username` and `email` in the query
//! string. Those parameters populate the session exactly like a password
//! login, and must then be removed from the URL so a refresh does not
//! replay them.

use url::Url;
use url::form_urlencoded;

use crate::error::SessionError;
use crate::session::{LoginResponse, SessionStore};

/// Identity provider recorded for federated logins.
pub const FEDERATED_PROVIDER: &str = "google";

/// Credentials carried by a federated-login redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedCallback {
    pub token: String,
    pub username: String,
    pub email: String,
}

impl FederatedCallback {
    /// Recognise a callback query string (with or without the leading `?`).
    ///
    /// All three parameters must be present and the token non-empty.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut token = None;
        let mut username = None;
        let mut email = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "token" => token = Some(value.into_owned()),
                "username" => username = Some(value.into_owned()),
                "email" => email = Some(value.into_owned()),
                _ => {}
            }
        }

        let token = token.filter(|t| !t.is_empty())?;
        Some(Self {
            token,
            username: username?,
            email: email?,
        })
    }

    /// Recognise a callback from a full redirect URL.
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        Self::from_query(parsed.query()?)
    }

    pub fn into_login_response(self) -> LoginResponse {
        LoginResponse {
            token: self.token,
            username: Some(self.username),
            email: Some(self.email),
            token_type: Some("Bearer".to_string()),
            auth_provider: Some(FEDERATED_PROVIDER.to_string()),
        }
    }
}

impl SessionStore {
    /// Populate the session from a federated-login callback.
    pub fn complete_federated_login(&self, callback: FederatedCallback) -> Result<(), SessionError> {
        self.set_auth_data(&callback.into_login_response())
    }
}

/// The URL with its query string removed.
///
/// Input that is not an absolute URL is cut at the first `?`.
pub fn strip_query(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.to_string()
        }
        Err(_) => url.split('?').next().unwrap_or(url).to_string(),
    }
}
