//! MySQL implementation of the TokenRepository trait.
//!
//! Refresh records live in the `refresh_tokens` table and are never updated
//! after insertion.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tk_core::domain::entities::token::RefreshRecord;
use tk_core::errors::DomainError;
use tk_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::datastore("read refresh token id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::datastore("read refresh token user_id", e))?;

        Ok(RefreshRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::datastore("parse refresh token id", e))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::datastore("parse refresh token user_id", e))?,
            secret: row
                .try_get("secret")
                .map_err(|e| DomainError::datastore("read refresh token secret", e))?,
            valid_until: row
                .try_get::<DateTime<Utc>, _>("valid_until")
                .map_err(|e| DomainError::datastore("read refresh token valid_until", e))?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| DomainError::datastore("read refresh token issued_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn insert(&self, record: RefreshRecord) -> Result<RefreshRecord, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, secret, valid_until, issued_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(record.user_id.to_string())
            .bind(&record.secret)
            .bind(record.valid_until)
            .bind(record.issued_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::datastore("insert refresh token", e))?;

        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, secret, valid_until, issued_at
            FROM refresh_tokens
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::datastore("find refresh token", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }
}
