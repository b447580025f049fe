//! Concrete authentication backend
//!
//! Wraps the external auth upstream + `AuthConfig`. Issues sessions on
//! login and verifies them on later requests. Holds no per-request state.

use std::sync::Arc;

use chrono::Utc;
use marketdesk_upstream::{AuthUpstream, UpstreamError};

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{issue_session_token, validate_session_token};
use crate::types::{IssuedSession, SessionIdentity};

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    upstream: Arc<dyn AuthUpstream>,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(upstream: Arc<dyn AuthUpstream>, config: AuthConfig) -> Self {
        Self { upstream, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Check credentials with the auth backend and mint a session for the user.
    ///
    /// The upstream access token is dropped here and never reaches the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let grant = self
            .upstream
            .login(username, password)
            .await
            .map_err(|e| match e {
                UpstreamError::Rejected(message) => {
                    tracing::info!(username = %username, reason = %message, "Login rejected by auth backend");
                    AuthError::InvalidCredentials(message)
                }
                other => {
                    tracing::error!(error = %other, username = %username, "Auth backend unavailable");
                    AuthError::UpstreamUnavailable
                }
            })?;

        let identity = SessionIdentity::from(grant.user);
        let issued = issue_session_token(&identity, &self.config, Utc::now())?;

        tracing::info!(
            user_id = identity.id,
            username = %identity.username,
            role = %identity.role,
            session_id = %issued.session_id,
            "Session issued"
        );

        Ok(issued)
    }

    /// Verify a session token and return the identity it carries.
    pub fn authenticate_session(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_session_token(token, &self.config)?;
        AuthContext::try_from(claims)
    }
}
