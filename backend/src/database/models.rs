use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::UserInfo;
use sqlx::FromRow;
use uuid::Uuid;

/// Account role. A closed two-value enumeration; any other persisted value
/// is a data-integrity error, not a silent access denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = String;

    // Case-insensitive on purpose: persisted role casing is not trusted.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role {:?}", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::try_from(value.as_str())
    }
}

/// A persisted user account.
///
/// `email` keeps the casing the user registered with; `email_normalized` is
/// the trimmed, lowercased projection the storage layer enforces uniqueness
/// on. The two are written together and never diverge.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub email_normalized: String,
    pub password_hash: String,
    pub display_name: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh account with a generated id and current timestamps.
    pub fn new(email: &str, password_hash: String, display_name: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_string(),
            email_normalized: Self::normalize_email(email),
            password_hash,
            display_name,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical lookup key: full email, trimmed and lowercased. Normalizing
    /// at write time lets lookups be plain equality instead of a pattern
    /// match.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Public projection of the account. The password hash never leaves the
    /// backend.
    pub fn public_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role.to_string(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}
