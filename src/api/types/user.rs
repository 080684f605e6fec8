//! User-facing response bodies

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Confirmation body for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Public view of a registered user (safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}
