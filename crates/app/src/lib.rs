//! Marketdesk application composition root
//!
//! Composes the sessions domain with the route gate and shared
//! infrastructure routes into a single application.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use marketdesk_auth::{route_gate, AuthBackend, AuthConfig, GateConfig};
use marketdesk_common::Config;
use marketdesk_sessions::SessionsState;
use marketdesk_upstream::{AuthUpstream, UpstreamConfig, UpstreamServiceFactory};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Login bodies are two short strings
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create the main application router, building the auth upstream from config
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let upstream = UpstreamServiceFactory::create(UpstreamConfig {
        provider: config.auth_provider.clone(),
        base_url: config.auth_backend_url.clone(),
        login_path: config.auth_login_path.clone(),
    })?;

    tracing::info!(provider = %config.auth_provider, "Auth upstream configured");

    Ok(create_app_with_upstream(config, Arc::from(upstream)))
}

/// Create the application router around an existing auth upstream
pub fn create_app_with_upstream(config: &Config, upstream: Arc<dyn AuthUpstream>) -> Router {
    let auth = AuthBackend::new(
        upstream,
        AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            secure_cookies: !config.app_env.is_development(),
        },
    );

    let sessions_state = SessionsState::new(
        auth,
        &config.admin_required_role,
        &config.signin_path,
    );

    let gate_config = GateConfig {
        protected_prefixes: config.protected_paths.clone(),
        signin_path: config.signin_path.clone(),
    };

    // The gate wraps every route, including ones no router matches
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Marketdesk API v0.1.0" }))
        .merge(marketdesk_sessions::routes(sessions_state))
        .layer(from_fn_with_state(gate_config, route_gate))
}

/// CORS for the configured browser origins. Credentials are allowed so the
/// session cookie travels with cross-origin requests.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Outer HTTP stack shared by both binaries: tracing, CORS, body limit.
///
/// Each `Router::layer` call re-wraps the router, so the body limit ends up
/// outermost and CORS sees the router's own response body.
pub fn with_http_layers(app: Router, cors_origins: &[String]) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
        .layer(body_limit_layer())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
