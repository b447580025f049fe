//! Session authentication for Marketdesk
//!
//! Issues and verifies signed session tokens carried in the `session` cookie,
//! and provides the two request-gating tiers:
//! - the route gate, a cheap path + cookie-presence check on every request
//! - the guard, a full token verification plus role/permission check
//!
//! Handlers get the verified identity through axum extractors that work with
//! any state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
pub mod gate;
pub mod guard;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use cookie::{clear_session_cookie, session_cookie, session_token, SESSION_COOKIE_NAME};
pub use error::AuthError;
pub use extractors::SessionUser;
pub use gate::{route_gate, GateConfig, GateState};
pub use guard::{
    evaluate, require_session, DenialReason, GuardDecision, GuardRequirement, GuardState,
    SessionState,
};
pub use jwt::{issue_session_token, validate_session_token, SESSION_TTL_SECS};
pub use types::{IssuedSession, SessionIdentity};
