//! Token repository trait defining the interface for refresh record persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshRecord;
use crate::errors::DomainError;

/// Repository trait for the `tokens` collection
///
/// Records are written once at issuance and only read afterwards; rotation
/// never updates them. Implementations report collaborator failures as
/// `DomainError::Datastore` and must not retry.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh record
    ///
    /// # Arguments
    /// * `record` - The record to insert, keyed by its token ID
    ///
    /// # Returns
    /// * `Ok(RefreshRecord)` - The stored record
    /// * `Err(DomainError)` - Insert failed (including a duplicate ID)
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Utc;
    /// # use uuid::Uuid;
    /// # use tk_core::repositories::TokenRepository;
    /// # use tk_core::domain::entities::token::RefreshRecord;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = RefreshRecord::new(Uuid::now_v7(), Uuid::now_v7(), "secret".to_string(), Utc::now(), 24)
    ///     .ok_or("lifetime out of range")?;
    /// let saved = repo.insert(record).await?;
    /// println!("Refresh record stored with ID: {}", saved.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, record: RefreshRecord) -> Result<RefreshRecord, DomainError>;

    /// Find a refresh record by its token ID
    ///
    /// # Returns
    /// * `Ok(Some(RefreshRecord))` - Record found
    /// * `Ok(None)` - No record with that ID
    /// * `Err(DomainError)` - Datastore error occurred
    async fn find_by_id(&self, token_id: Uuid) -> Result<Option<RefreshRecord>, DomainError>;
}
