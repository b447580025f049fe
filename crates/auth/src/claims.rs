//! Session token claims

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Claims carried inside the signed `session` cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (upstream user ID, decimal)
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Granted permission names
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Session ID
    pub jti: String,
}
