//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository};

/// In-memory implementation of UserRepository
///
/// The store lives as long as the process; nothing survives a restart.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        // Check and write under one guard so the first writer wins
        let mut users = self.users.write().await;

        if users.contains_key(user.username()) {
            return Err(DomainError::conflict("Username already exists"));
        }

        users.insert(user.username().to_string(), user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
