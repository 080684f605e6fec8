//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user, keyed by username
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique username, immutable once registered
    username: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Registration timestamp
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a newly registered user
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a user loaded from storage
    pub fn restore(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
