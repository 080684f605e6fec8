//! User service implementing registration on top of a repository

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository, validate_registration};

use super::password::PasswordHasher;

/// Outcome of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub message: String,
}

/// User service for registration and lookup
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user from a decoded request payload
    ///
    /// `None` stands for an absent or unparseable body. Failures leave the
    /// store untouched.
    pub async fn register(&self, payload: Option<&Value>) -> Result<Registration, DomainError> {
        let credentials =
            validate_registration(payload).map_err(|e| DomainError::validation(e.to_string()))?;

        // Reject known duplicates before paying for the hash; insert re-checks atomically
        if self.repository.exists(&credentials.username).await? {
            warn!(username = %credentials.username, "Registration rejected: username taken");
            return Err(DomainError::conflict("Username already exists"));
        }

        let password_hash = self.hash_password(credentials.password).await?;
        let user = self
            .repository
            .insert(User::new(&credentials.username, password_hash))
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::Conflict { .. }) {
                    warn!(username = %credentials.username, "Registration lost race for username");
                }
            })?;

        info!(username = %user.username(), "User registered");

        Ok(Registration {
            message: format!("User {} registered successfully!", user.username()),
            user,
        })
    }

    /// Get a registered user by username
    pub async fn get(&self, username: &str) -> Result<User, DomainError> {
        debug!(username = %username, "Looking up user");
        self.repository
            .get(username)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    /// Count registered users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Argon2 is CPU-bound, keep it off the async workers
    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }
}
