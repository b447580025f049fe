//! Marketdesk Auth Upstream
//!
//! Credentials are checked by a separate API server. This crate provides:
//! - The `AuthUpstream` trait the session issuer depends on
//! - An HTTP client for the real backend
//! - A mock backend for tests and local development
//! - Normalization of the backend's user payload

pub mod client;
pub mod mock;
mod permissions;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("Auth upstream configuration error: {0}")]
    Configuration(String),

    /// The backend answered and refused the credentials
    #[error("Credentials rejected: {0}")]
    Rejected(String),

    #[error("Auth upstream request error: {0}")]
    Request(String),

    #[error("Auth upstream response error: {0}")]
    Response(String),
}

/// User snapshot as reported by the auth backend.
///
/// `permissions` accepts either a list of names or a name → bool map and is
/// always normalized to a set of granted permission names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamUser {
    pub id: i64,
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, deserialize_with = "permissions::deserialize")]
    pub permissions: BTreeSet<String>,
}

fn default_role() -> String {
    "user".to_string()
}

/// Successful login answer from the auth backend
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    pub access_token: String,
    pub user: UpstreamUser,
}

/// Auth upstream configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Upstream provider (http, mock)
    pub provider: String,
    /// Base URL of the auth backend
    pub base_url: String,
    /// Login path on the auth backend
    pub login_path: String,
}

/// Auth backend abstraction used by the session issuer.
#[async_trait::async_trait]
pub trait AuthUpstream: Send + Sync {
    /// Exchange a username and password for an access token and user snapshot.
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, UpstreamError>;
}

/// Factory for creating AuthUpstream implementations.
pub struct UpstreamServiceFactory;

impl UpstreamServiceFactory {
    /// Create an AuthUpstream based on configuration.
    pub fn create(config: UpstreamConfig) -> Result<Box<dyn AuthUpstream>, UpstreamError> {
        match config.provider.as_str() {
            "http" => {
                if config.base_url.is_empty() {
                    return Err(UpstreamError::Configuration(
                        "AUTH_BACKEND_URL is required for the http provider".to_string(),
                    ));
                }
                let client = client::UpstreamClient::new(config);
                tracing::info!(login_url = %client.login_url(), "Creating HTTP auth upstream");
                Ok(Box::new(client))
            }
            "mock" => {
                tracing::warn!("Creating mock auth upstream with demo accounts");
                Ok(Box::new(mock::MockAuthUpstream::with_demo_accounts()))
            }
            provider => Err(UpstreamError::Configuration(format!(
                "Unknown auth provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
