//! Identity provider payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use fancyspaces_core::UserProfile;

/// Account registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Always `basic` for email/password accounts
    pub provider: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credential check request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateUserRequest {
    /// Email address of the account
    pub user: String,
    pub password: String,
}

/// Profile update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// API key metadata. The key itself is only returned once, on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub key_id: String,
    pub user_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub description: String,
}
