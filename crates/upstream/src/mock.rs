//! Mock Auth Upstream Implementation
//!
//! In-memory credential table for tests and local development. Records
//! every login attempt so tests can assert on what reached the backend.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::{AuthUpstream, LoginGrant, UpstreamError, UpstreamUser};

#[derive(Debug, Clone)]
struct MockAccount {
    password: String,
    user: UpstreamUser,
}

/// Mock auth backend
#[derive(Debug, Clone, Default)]
pub struct MockAuthUpstream {
    accounts: Arc<Mutex<HashMap<String, MockAccount>>>,
    attempts: Arc<Mutex<Vec<String>>>,
    outage: Arc<Mutex<Option<UpstreamError>>>,
}

impl MockAuthUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local development accounts: `admin`/`admin` and `viewer`/`viewer`.
    pub fn with_demo_accounts() -> Self {
        Self::new()
            .with_account(
                "admin",
                "admin",
                UpstreamUser {
                    id: 1,
                    username: "admin".to_string(),
                    role: "admin".to_string(),
                    permissions: ["assets:write", "posts:write", "scheduler:run"]
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                },
            )
            .with_account(
                "viewer",
                "viewer",
                UpstreamUser {
                    id: 2,
                    username: "viewer".to_string(),
                    role: "user".to_string(),
                    permissions: BTreeSet::from(["assets:read".to_string()]),
                },
            )
    }

    /// Register an account
    pub fn with_account(self, username: &str, password: &str, user: UpstreamUser) -> Self {
        self.accounts.lock().unwrap().insert(
            username.to_string(),
            MockAccount {
                password: password.to_string(),
                user,
            },
        );
        self
    }

    /// Make every subsequent login fail with `error` (or succeed again with `None`)
    pub fn set_outage(&self, error: Option<UpstreamError>) {
        *self.outage.lock().unwrap() = error;
    }

    /// Usernames of all login attempts, in order
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AuthUpstream for MockAuthUpstream {
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, UpstreamError> {
        self.attempts.lock().unwrap().push(username.to_string());

        if let Some(error) = self.outage.lock().unwrap().clone() {
            return Err(error);
        }

        let accounts = self.accounts.lock().unwrap();
        match accounts.get(username) {
            Some(account) if account.password == password => {
                tracing::debug!(username = %username, "Mock upstream accepted credentials");
                Ok(LoginGrant {
                    access_token: format!("mock-access-token-{}", account.user.id),
                    user: account.user.clone(),
                })
            }
            _ => Err(UpstreamError::Rejected(
                "Incorrect username or password".to_string(),
            )),
        }
    }
}
