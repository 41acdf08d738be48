//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tk_core::domain::entities::user::User;
use tk_core::errors::DomainError;
use tk_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::datastore("read user id", e))?;
        let join_date: DateTime<Utc> = row
            .try_get("join_date")
            .map_err(|e| DomainError::datastore("read user join_date", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::datastore("parse user id", e))?,
            join_date,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query("INSERT INTO users (id, join_date) VALUES (?, ?)")
            .bind(user.id.to_string())
            .bind(user.join_date)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::datastore("insert user", e))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, join_date FROM users WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::datastore("find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::datastore("check user exists", e))?;

        Ok(count > 0)
    }
}
