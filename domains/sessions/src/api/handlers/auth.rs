//! Session API handlers
//!
//! Implements:
//! - POST /api/auth/login: Check credentials upstream, set the session cookie
//! - POST /api/auth/logout: Clear the session cookie
//! - GET /api/auth/verify: Return the identity carried by the session cookie

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use marketdesk_auth::{
    clear_session_cookie, session_cookie, AuthBackend, AuthError, SessionIdentity, SessionUser,
    SESSION_COOKIE_NAME,
};
use marketdesk_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for `POST /api/auth/login`. Absent fields count as empty.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Response for `POST /api/auth/login`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionIdentity,
    pub message: String,
}

/// Response for `POST /api/auth/logout`
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Response for `GET /api/auth/verify`
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: SessionIdentity,
}

/// POST /api/auth/login: Check credentials upstream, set the session cookie
pub async fn login(
    State(auth): State<AuthBackend>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AuthError> {
    let issued = auth.login(&request.username, &request.password).await?;

    let jar = jar.add(session_cookie(&issued.token, auth.config().secure_cookies));

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            user: issued.identity,
            message: "Login successful".to_string(),
        }),
    ))
}

/// POST /api/auth/logout: Clear the session cookie
///
/// Always succeeds, with or without a current session.
pub async fn logout(
    State(auth): State<AuthBackend>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        match auth.authenticate_session(cookie.value()) {
            Ok(ctx) => tracing::info!(
                user_id = ctx.identity.id,
                session_id = %ctx.session_id,
                "Session ended"
            ),
            Err(_) => tracing::debug!("Clearing an invalid session cookie"),
        }
    }

    let jar = jar.add(clear_session_cookie(auth.config().secure_cookies));

    (
        jar,
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// GET /api/auth/verify: Return the identity carried by the session cookie
pub async fn verify(SessionUser(auth_context): SessionUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        user: auth_context.identity,
    })
}
