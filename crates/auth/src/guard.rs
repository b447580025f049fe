//! Session guard: full verification before a protected view renders
//!
//! The decision is a pure function of the session state and the view's
//! requirement, so it can be re-evaluated whenever the state changes and
//! nothing is rendered before it says `Render`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::cookie::session_token;
use crate::error::AuthError;
use crate::gate::signin_redirect;

/// What is known about the caller's session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Verification still in flight
    Pending,
    /// No session, or it failed verification
    Anonymous,
    Authenticated(AuthContext),
}

/// Capabilities a protected view requires
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardRequirement {
    pub role: Option<String>,
    pub permission: Option<String>,
}

impl GuardRequirement {
    /// Any verified session
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            permission: None,
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    MissingRole { required: String, actual: String },
    MissingPermission(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a loading indicator, nothing else
    Loading,
    RedirectToSignin,
    AccessDenied(DenialReason),
    Render,
}

/// Decide what a protected view may show for the given session state.
pub fn evaluate(state: &SessionState, requirement: &GuardRequirement) -> GuardDecision {
    let ctx = match state {
        SessionState::Pending => return GuardDecision::Loading,
        SessionState::Anonymous => return GuardDecision::RedirectToSignin,
        SessionState::Authenticated(ctx) => ctx,
    };

    if let Some(role) = &requirement.role {
        if !ctx.has_role(role) {
            return GuardDecision::AccessDenied(DenialReason::MissingRole {
                required: role.clone(),
                actual: ctx.identity.role.clone(),
            });
        }
    }

    if let Some(permission) = &requirement.permission {
        if !ctx.has_permission(permission) {
            return GuardDecision::AccessDenied(DenialReason::MissingPermission(
                permission.clone(),
            ));
        }
    }

    GuardDecision::Render
}

/// State for the `require_session` middleware
#[derive(Clone)]
pub struct GuardState {
    pub backend: AuthBackend,
    pub requirement: GuardRequirement,
    pub signin_path: String,
}

/// Guard middleware for protected views.
///
/// Verifies the session cookie, then applies `evaluate`. On `Render` the
/// verified `AuthContext` is placed in request extensions for the handler.
///
/// Use with `axum::middleware::from_fn_with_state(guard_state, require_session)`.
pub async fn require_session(
    State(guard): State<GuardState>,
    mut request: Request,
    next: Next,
) -> Response {
    let state = match session_token(request.headers()) {
        None => SessionState::Anonymous,
        Some(token) => match guard.backend.authenticate_session(&token) {
            Ok(ctx) => SessionState::Authenticated(ctx),
            Err(_) => SessionState::Anonymous,
        },
    };

    let path = request.uri().path().to_string();

    match evaluate(&state, &guard.requirement) {
        GuardDecision::Render => {
            if let SessionState::Authenticated(ctx) = state {
                tracing::debug!(
                    path = %path,
                    user_id = ctx.identity.id,
                    expires_at = %ctx.expires_at,
                    "Guard admitted session"
                );
                request.extensions_mut().insert(ctx);
            }
            next.run(request).await
        }
        GuardDecision::AccessDenied(reason) => {
            tracing::info!(path = %path, reason = ?reason, "Guard denied access");
            AuthError::AccessDenied.into_response()
        }
        GuardDecision::RedirectToSignin | GuardDecision::Loading => {
            tracing::debug!(path = %path, "Guard found no valid session, redirecting to sign-in");
            signin_redirect(&guard.signin_path, &path)
        }
    }
}
