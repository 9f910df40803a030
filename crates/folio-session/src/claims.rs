//! Claims carried in the bearer token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Role granting access to the admin panel.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Payload claims issued by the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Subject (the account email).
    #[serde(default)]
    pub sub: Option<String>,

    /// Granted roles, in issue order.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Numeric account id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i64>,

    /// Issued at (seconds since the epoch).
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration (seconds since the epoch).
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Check if the token has expired.
    ///
    /// Advisory only: the backend rejects expired tokens with a 401.
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at() {
            Utc::now() > expires_at
        } else {
            false
        }
    }
}

/// Accept the id as a JSON number or a numeric string.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Number(n)) => Some(n),
        Some(Id::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
