//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::info;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// PostgreSQL implementation of UserRepository
///
/// Uniqueness is enforced by the primary key on `username`, so concurrent
/// inserts across processes still resolve to a single winner.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and make sure the users table exists
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;

        Ok(repository)
    }

    /// Creates the users table if it doesn't exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        info!("Users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(user.username())
        .bind(user.password_hash())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert user: {}", e)))?;

        insert_outcome(result.rows_affected())?;

        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    let username: String = row.get("username");
    let password_hash: String = row.get("password_hash");
    let created_at: DateTime<Utc> = row.get("created_at");

    User::restore(username, password_hash, created_at)
}

/// `ON CONFLICT DO NOTHING` reports zero affected rows when the username was taken
fn insert_outcome(rows_affected: u64) -> Result<(), DomainError> {
    if rows_affected == 0 {
        return Err(DomainError::conflict("Username already exists"));
    }

    Ok(())
}
