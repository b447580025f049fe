//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::cookie::session_token;
use crate::error::AuthError;

/// Verified session extractor (reads the `session` cookie)
///
/// Rejects with `MissingSession` when there is no cookie and with
/// `InvalidSession` when the token fails verification.
#[derive(Debug)]
pub struct SessionUser(pub AuthContext);

impl<S> FromRequestParts<S> for SessionUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        // A guard layer may already have verified this request
        if let Some(ctx) = parts.extensions.get::<AuthContext>() {
            return Ok(SessionUser(ctx.clone()));
        }

        let backend = AuthBackend::from_ref(state);

        let token = session_token(&parts.headers).ok_or(AuthError::MissingSession)?;
        let auth_context = backend.authenticate_session(&token)?;

        Ok(SessionUser(auth_context))
    }
}
