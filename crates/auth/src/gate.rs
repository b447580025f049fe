//! Route gate: first-line, path-based session check
//!
//! Runs on every request. Classifies the path, and for protected paths only
//! checks that a `session` cookie is present. The token itself is verified
//! later by the guard or the handler.
//!
//! States:
//! - `Bypassed`: static assets, API routes, files with an extension (terminal)
//! - `Checking`: a protected prefix matched, cookie not yet inspected
//! - `Allowed`: request continues (terminal)
//! - `RedirectToSignin`: 307 to the sign-in page (terminal)

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;

use crate::cookie::session_token;

/// Path prefixes that never go through the gate
pub const EXCLUDED_PREFIXES: &[&str] = &["/api", "/_next/static", "/_next/image", "/favicon.ico"];

lazy_static::lazy_static! {
    /// Last path segment looks like a file name (`/logo.svg`, `/docs/report.pdf`)
    static ref FILE_EXTENSION_REGEX: Regex = Regex::new(r"/[^/]*\.[^/.]+$").unwrap();
}

/// Route gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Normalized prefixes (`/admin`), each protecting itself and its descendants
    pub protected_prefixes: Vec<String>,
    pub signin_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/admin".to_string()],
            signin_path: "/signin".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Bypassed,
    Checking,
    Allowed,
    RedirectToSignin,
}

impl GateState {
    /// Classify a path before looking at cookies
    pub fn enter(path: &str, config: &GateConfig) -> Self {
        if is_excluded(path) {
            return GateState::Bypassed;
        }

        if config
            .protected_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
        {
            return GateState::Checking;
        }

        GateState::Allowed
    }

    /// Resolve `Checking` using cookie presence; terminal states are unchanged
    pub fn resolve(self, has_session_cookie: bool) -> Self {
        match self {
            GateState::Checking if has_session_cookie => GateState::Allowed,
            GateState::Checking => GateState::RedirectToSignin,
            terminal => terminal,
        }
    }
}

/// Run the whole state machine for one request
pub fn classify_path(path: &str, has_session_cookie: bool, config: &GateConfig) -> GateState {
    GateState::enter(path, config).resolve(has_session_cookie)
}

/// `path` is `prefix` itself or lies below it (`/admin`, `/admin/x`, not `/administrator`)
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
        || FILE_EXTENSION_REGEX.is_match(path)
}

/// 307 to `{signin_path}?from={percent-encoded path}`
pub fn signin_redirect(signin_path: &str, from: &str) -> Response {
    let location = format!("{}?from={}", signin_path, urlencoding::encode(from));
    Redirect::temporary(&location).into_response()
}

/// Route gate middleware.
///
/// Use with `axum::middleware::from_fn_with_state(gate_config, route_gate)`.
pub async fn route_gate(
    State(config): State<GateConfig>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let has_cookie = session_token(request.headers()).is_some();

    match classify_path(&path, has_cookie, &config) {
        GateState::RedirectToSignin => {
            tracing::debug!(path = %path, "No session cookie on protected path, redirecting to sign-in");
            signin_redirect(&config.signin_path, &path)
        }
        _ => next.run(request).await,
    }
}
