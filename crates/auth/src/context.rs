//! Authorization context for verified sessions

use chrono::{DateTime, TimeZone, Utc};

use crate::claims::SessionClaims;
use crate::error::AuthError;
use crate::types::SessionIdentity;

/// Represents a verified session
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub identity: SessionIdentity,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    /// Check if the session's role matches exactly
    pub fn has_role(&self, role: &str) -> bool {
        self.identity.role == role
    }

    /// Check if the permission is in the session's permission set
    pub fn has_permission(&self, permission: &str) -> bool {
        self.identity.permissions.contains(permission)
    }
}

impl TryFrom<SessionClaims> for AuthContext {
    type Error = AuthError;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        let id: i64 = claims.sub.parse().map_err(|_| {
            tracing::debug!(sub = %claims.sub, "Session subject is not a user ID");
            AuthError::InvalidSession
        })?;

        let expires_at = i64::try_from(claims.exp)
            .ok()
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
            .ok_or(AuthError::InvalidSession)?;

        Ok(Self {
            identity: SessionIdentity {
                id,
                username: claims.username,
                role: claims.role,
                permissions: claims.permissions,
            },
            session_id: claims.jti,
            expires_at,
        })
    }
}
