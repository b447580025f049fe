//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Login request without a username or password
    MissingCredentials,
    /// The auth backend refused the credentials; carries its message
    InvalidCredentials(String),
    /// The auth backend could not be reached or answered garbage
    UpstreamUnavailable,
    TokenIssueFailed,
    /// No `session` cookie on the request
    MissingSession,
    /// Bad signature, expired, or malformed session token
    InvalidSession,
    /// Verified session lacks the required role or permission
    AccessDenied,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials(_)
            | AuthError::MissingSession
            | AuthError::InvalidSession => StatusCode::UNAUTHORIZED,
            AuthError::AccessDenied => StatusCode::FORBIDDEN,
            AuthError::UpstreamUnavailable | AuthError::TokenIssueFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            AuthError::MissingCredentials => "Username and password are required".to_string(),
            AuthError::InvalidCredentials(message) => message.clone(),
            AuthError::UpstreamUnavailable | AuthError::TokenIssueFailed => {
                "Internal server error".to_string()
            }
            AuthError::MissingSession => "No session found".to_string(),
            AuthError::InvalidSession => "Invalid session".to_string(),
            AuthError::AccessDenied => "Access denied".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.message(),
        }));

        (self.status_code(), body).into_response()
    }
}
