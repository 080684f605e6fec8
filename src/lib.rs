//! User Registry API
//!
//! A small HTTP service that registers username/password pairs:
//! - Salted Argon2 password hashes, never plaintext
//! - In-memory or PostgreSQL user store behind one repository trait
//! - Liveness and readiness checks

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::info;

use crate::api::state::AppState;
use crate::config::StorageBackend;
use crate::domain::user::UserRepository;
use crate::infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};

/// Create the application state with the default (in-memory) configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let repository: Arc<dyn UserRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryUserRepository::new()),
        StorageBackend::Postgres => {
            let database_url = config.storage.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;

            info!("Connecting to PostgreSQL...");
            let repository = PostgresUserRepository::connect(database_url).await?;
            info!("PostgreSQL connection established");

            Arc::new(repository)
        }
    };

    let user_service = UserService::new(repository, Arc::new(Argon2Hasher::new()));

    Ok(AppState::new(user_service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    #[tokio::test]
    async fn test_default_state_uses_empty_memory_store() {
        let state = create_app_state().await.unwrap();

        assert_eq!(state.user_service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_postgres_requires_database_url() {
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Postgres,
                database_url: None,
            },
            ..AppConfig::default()
        };

        let err = create_app_state_with_config(&config).await.err().unwrap();
        assert!(err.to_string().contains("database_url"));
    }
}
