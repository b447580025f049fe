//! Admin shell handler
//!
//! Only reached after the session guard renders, so the identity is always
//! present in request extensions.

use axum::{http::Uri, Json};
use marketdesk_auth::{SessionIdentity, SessionUser};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminShellResponse {
    pub success: bool,
    pub user: SessionIdentity,
    pub path: String,
}

/// GET /admin, /admin/{*path}
pub async fn shell(SessionUser(auth_context): SessionUser, uri: Uri) -> Json<AdminShellResponse> {
    tracing::debug!(
        user_id = auth_context.identity.id,
        path = %uri.path(),
        "Rendering admin shell"
    );

    Json(AdminShellResponse {
        success: true,
        user: auth_context.identity,
        path: uri.path().to_string(),
    })
}
