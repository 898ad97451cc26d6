//! Identity of the logged-in user as returned by the identity provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded user profile, consumed read-only by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Account provider, e.g. `basic`, `google`, `github`, `discord`
    pub provider: String,
    pub name: String,
    pub email: String,
    pub verified: bool,
    /// Whether the account has a password set
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == "admin")
    }

    /// Active and verified accounts may use authenticated features
    pub const fn is_valid(&self) -> bool {
        self.is_active && self.verified
    }
}
