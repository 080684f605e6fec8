//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations must make `insert` atomic with respect to the uniqueness
/// check: of two concurrent inserts for the same username exactly one succeeds.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by username
    async fn get(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user, failing with `Conflict` if the username is taken
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Count registered users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username exists
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get(username).await?.is_some())
    }
}
