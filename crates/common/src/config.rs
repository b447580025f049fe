//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;

/// Default login path on the external auth backend
pub const DEFAULT_AUTH_LOGIN_PATH: &str = "/api/v1/auth/login";

/// Default sign-in page that unauthenticated requests are redirected to
pub const DEFAULT_SIGNIN_PATH: &str = "/signin";

/// Default comma-separated list of protected path prefixes
pub const DEFAULT_PROTECTED_PATHS: &str = "/admin";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Parse `APP_ENV`; anything other than a development alias is production
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => AppEnv::Development,
            _ => AppEnv::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, AppEnv::Development)
    }
}

#[derive(Clone)]
pub struct Config {
    /// Secret used to sign session tokens
    pub jwt_secret: String,

    /// External auth backend
    pub auth_provider: String,
    pub auth_backend_url: String,
    pub auth_login_path: String,

    /// Route gating
    pub protected_paths: Vec<String>,
    pub signin_path: String,
    pub admin_required_role: String,

    /// Runtime configuration
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    #[mutants::skip] // Formatting only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("auth_provider", &self.auth_provider)
            .field("auth_backend_url", &self.auth_backend_url)
            .field("auth_login_path", &self.auth_login_path)
            .field("protected_paths", &self.protected_paths)
            .field("signin_path", &self.signin_path)
            .field("admin_required_role", &self.admin_required_role)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let auth_provider = lookup("AUTH_PROVIDER").unwrap_or_else(|| "http".to_string());
        let auth_backend_url = lookup("AUTH_BACKEND_URL").unwrap_or_default();
        if auth_provider == "http" && auth_backend_url.is_empty() {
            return Err(anyhow::anyhow!(
                "AUTH_BACKEND_URL is required for the http auth provider"
            ));
        }

        let config = Self {
            jwt_secret,
            auth_provider,
            auth_backend_url,
            auth_login_path: lookup("AUTH_LOGIN_PATH")
                .unwrap_or_else(|| DEFAULT_AUTH_LOGIN_PATH.to_string()),

            protected_paths: parse_path_list(
                &lookup("PROTECTED_PATHS").unwrap_or_else(|| DEFAULT_PROTECTED_PATHS.to_string()),
            ),
            signin_path: lookup("SIGNIN_PATH").unwrap_or_else(|| DEFAULT_SIGNIN_PATH.to_string()),
            admin_required_role: lookup("ADMIN_REQUIRED_ROLE")
                .unwrap_or_else(|| "admin".to_string()),

            app_env: AppEnv::parse(&lookup("APP_ENV").unwrap_or_default()),
            cors_allowed_origins: parse_list(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

/// Split a comma-separated value, dropping blanks
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like `parse_list`, but normalizes each entry to `/prefix` without a trailing slash
fn parse_path_list(value: &str) -> Vec<String> {
    parse_list(value)
        .into_iter()
        .map(|p| {
            let trimmed = p.trim_end_matches('/');
            if trimmed.starts_with('/') {
                trimmed.to_string()
            } else {
                format!("/{}", trimmed)
            }
        })
        .filter(|p| p != "/")
        .collect()
}
