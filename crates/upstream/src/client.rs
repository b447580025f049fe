//! Auth Upstream HTTP Client Implementation
//!
//! POSTs credentials to `{base_url}{login_path}` and classifies the answer:
//! 2xx → `LoginGrant`, 4xx → `Rejected` with the backend's message,
//! anything else → `Request`/`Response` errors.

use reqwest::StatusCode;

use crate::{AuthUpstream, LoginGrant, UpstreamConfig, UpstreamError};

/// Fallback message when a rejection carries no readable reason
pub const DEFAULT_REJECTION_MESSAGE: &str = "Invalid credentials";

/// Real HTTP client for the external auth backend.
pub struct UpstreamClient {
    http: reqwest::Client,
    login_url: String,
}

impl UpstreamClient {
    /// Create a new client from configuration.
    pub fn new(config: UpstreamConfig) -> Self {
        let login_url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.login_path.trim_start_matches('/')
        );
        Self {
            http: reqwest::Client::new(),
            login_url,
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

/// Pull a human-readable reason out of an error body.
///
/// Backends in the wild use `message`, `detail` or `error`; only string values count.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "detail", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string())
}

#[async_trait::async_trait]
impl AuthUpstream for UpstreamClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, UpstreamError> {
        let response = self
            .http
            .post(&self.login_url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let grant = response
                .json::<LoginGrant>()
                .await
                .map_err(|e| UpstreamError::Response(format!("Malformed login response: {}", e)))?;
            tracing::debug!(user_id = grant.user.id, "Auth upstream accepted credentials");
            return Ok(grant);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS {
            let message = rejection_message(&body);
            tracing::debug!(status = %status, "Auth upstream rejected credentials");
            return Err(UpstreamError::Rejected(message));
        }

        Err(UpstreamError::Response(format!(
            "Auth backend returned {}: {}",
            status, body
        )))
    }
}
