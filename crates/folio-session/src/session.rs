//! Client session state and page guards.
//!
//! A [`Session`] is only ever replaced wholesale: populated from a login
//! response, or cleared on logout and on a 401 from the backend. Roles and
//! the user id are private and can only come from a decoded token payload.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::claims::ROLE_ADMIN;
use crate::error::{GuardError, SessionError};
use crate::token::decode_payload_unverified;

/// Body of a successful login, also synthesized from a federated-login
/// callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Token type, "Bearer".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Identity provider for federated logins (e.g. "google").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<String>,
}

impl LoginResponse {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: Some(username.into()),
            email: None,
            token_type: Some("Bearer".to_string()),
            auth_provider: None,
        }
    }
}

/// Ephemeral session of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    token: Option<String>,
    username: Option<String>,
    user_id: Option<i64>,
    roles: Vec<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }

    pub fn require_auth(&self) -> Result<(), GuardError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(GuardError::LoginRequired)
        }
    }

    pub fn require_admin(&self) -> Result<(), GuardError> {
        self.require_auth()?;
        if self.is_admin() {
            Ok(())
        } else {
            Err(GuardError::Forbidden)
        }
    }
}

/// Shared handle to the session of the current user.
///
/// Created once by the front end and handed to every component that needs
/// it, including the API client, which clears it on a 401.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bring the session into a consistent empty state unless someone is
    /// logged in. Safe to call on every page load.
    pub fn initialize(&self) {
        let mut session = self.write();
        if session.token.is_none() {
            *session = Session::default();
        }
    }

    /// Store a login response.
    ///
    /// The session is replaced whole. The token and username are always
    /// stored. Roles and the user id are taken from the decoded token
    /// payload; when the payload cannot be decoded they are left empty and
    /// the decode error is returned, but the user is still logged in.
    pub fn set_auth_data(&self, login: &LoginResponse) -> Result<(), SessionError> {
        let decoded = decode_payload_unverified(&login.token);

        let mut session = self.write();
        *session = Session {
            token: Some(login.token.clone()),
            username: login.username.clone(),
            ..Session::default()
        };

        match decoded {
            Ok(claims) => {
                session.roles = claims.roles;
                session.user_id = claims.user_id;
                tracing::info!(
                    username = session.username.as_deref().unwrap_or(""),
                    roles = ?session.roles,
                    "session established"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not decode token payload, roles unavailable");
                Err(e)
            }
        }
    }

    /// Clear all session fields.
    pub fn logout(&self) {
        *self.write() = Session::default();
        tracing::info!("session cleared");
    }

    /// Drop credentials after the backend rejected them.
    pub fn clear_credentials(&self) {
        let had_token = self.read().is_authenticated();
        *self.write() = Session::default();
        if had_token {
            tracing::warn!("backend rejected credentials, session cleared");
        }
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.read().username.clone()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.read().user_id
    }

    pub fn roles(&self) -> Vec<String> {
        self.read().roles.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    pub fn require_auth(&self) -> Result<(), GuardError> {
        self.read().require_auth()
    }

    pub fn require_admin(&self) -> Result<(), GuardError> {
        self.read().require_admin()
    }
}
