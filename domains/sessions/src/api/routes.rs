//! Route definitions for Sessions domain API

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use marketdesk_auth::require_session;

use super::handlers::{admin, auth};
use super::middleware::SessionsState;

/// Create session endpoints
fn auth_routes() -> Router<SessionsState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/verify", get(auth::verify))
}

/// Create admin shell routes behind the session guard
fn admin_routes(state: &SessionsState) -> Router<SessionsState> {
    Router::new()
        .route("/admin", get(admin::shell))
        // `{*path}` needs a non-empty tail
        .route("/admin/", get(admin::shell))
        .route("/admin/{*path}", get(admin::shell))
        .route_layer(from_fn_with_state(
            state.admin_guard.clone(),
            require_session,
        ))
}

/// Create all Sessions domain routes
pub fn routes(state: SessionsState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(admin_routes(&state))
        .with_state(state)
}
