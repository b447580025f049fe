//! Common error types and handling for Marketdesk

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-level error rendered as `{ success: false, message }`
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or incomplete request body; the message goes back verbatim
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> &str {
        match self {
            Error::Validation(msg) => msg,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.public_message(),
        }));

        (self.status_code(), body).into_response()
    }
}
