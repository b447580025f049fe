//! Session token signing and validation

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::{IssuedSession, SessionIdentity};

/// Fixed session lifetime: 24 hours
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Mint a signed session token for `identity`, valid for 24 hours from `issued_at`.
pub fn issue_session_token(
    identity: &SessionIdentity,
    config: &AuthConfig,
    issued_at: DateTime<Utc>,
) -> Result<IssuedSession, AuthError> {
    let expires_at = issued_at + TimeDelta::seconds(SESSION_TTL_SECS);
    let session_id = Uuid::new_v4().to_string();

    let claims = SessionClaims {
        sub: identity.id.to_string(),
        username: identity.username.clone(),
        role: identity.role.clone(),
        permissions: identity.permissions.clone(),
        iat: issued_at.timestamp().max(0) as u64,
        exp: expires_at.timestamp().max(0) as u64,
        jti: session_id.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })?;

    Ok(IssuedSession {
        token,
        session_id,
        identity: identity.clone(),
        expires_at,
    })
}

/// Verify signature and expiry of a session token.
///
/// Expiry is checked with zero leeway.
pub fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidSession
    })?;

    Ok(token_data.claims)
}
