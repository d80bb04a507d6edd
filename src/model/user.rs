//! Account records for the session container.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an account is allowed to do in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Gardener,
}

impl UserRole {
    pub fn display_text(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Manager => "Manager",
            UserRole::Gardener => "Gardener",
        }
    }
}

/// One stored account. Passwords are kept as-is, matching the demo data
/// model this replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
