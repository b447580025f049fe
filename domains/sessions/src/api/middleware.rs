//! Sessions domain state and auth backend integration

use axum::extract::FromRef;
use marketdesk_auth::{AuthBackend, GuardRequirement, GuardState};

/// Application state for the Sessions domain
#[derive(Clone)]
pub struct SessionsState {
    pub auth: AuthBackend,
    /// Guard applied to the admin shell
    pub admin_guard: GuardState,
}

impl SessionsState {
    /// Admin shell requires `admin_role`; unauthenticated visitors go to `signin_path`
    pub fn new(auth: AuthBackend, admin_role: &str, signin_path: &str) -> Self {
        let admin_guard = GuardState {
            backend: auth.clone(),
            requirement: GuardRequirement::role(admin_role),
            signin_path: signin_path.to_string(),
        };
        Self { auth, admin_guard }
    }
}

impl FromRef<SessionsState> for AuthBackend {
    fn from_ref(state: &SessionsState) -> Self {
        state.auth.clone()
    }
}
