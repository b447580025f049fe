//! Sessions domain: login, logout, verify, and the guarded admin shell

pub mod api;

// Re-export API types
pub use api::routes;
pub use api::SessionsState;

// Re-export auth types used by composition roots
pub use marketdesk_auth::{AuthBackend, AuthConfig, GateConfig, GuardRequirement, GuardState};
