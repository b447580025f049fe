//! Identity types carried by a session
//!
//! The auth backend owns users; a session only embeds a snapshot of the
//! fields needed for gating decisions.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use marketdesk_upstream::UpstreamUser;
use serde::Serialize;

/// Identity embedded in a session token and returned to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub permissions: BTreeSet<String>,
}

impl From<UpstreamUser> for SessionIdentity {
    fn from(user: UpstreamUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            permissions: user.permissions,
        }
    }
}

/// A freshly minted session. The token goes into the cookie only.
#[derive(Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session_id: String,
    pub identity: SessionIdentity,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for IssuedSession {
    #[mutants::skip] // Formatting only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedSession")
            .field("token", &"[REDACTED]")
            .field("session_id", &self.session_id)
            .field("identity", &self.identity)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
