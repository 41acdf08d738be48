//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing
#[derive(Clone, Default)]
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, RefreshRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a datastore error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Overwrite a stored record, used to stage expired or tampered records
    pub async fn put(&self, record: RefreshRecord) {
        self.records.write().await.insert(record.id, record);
    }

    fn check_available(&self, operation: &'static str) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::datastore(operation, "mock datastore unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, record: RefreshRecord) -> Result<RefreshRecord, DomainError> {
        self.check_available("insert refresh record")?;
        let mut records = self.records.write().await;

        if records.contains_key(&record.id) {
            return Err(DomainError::datastore(
                "insert refresh record",
                format!("duplicate token id {}", record.id),
            ));
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, token_id: Uuid) -> Result<Option<RefreshRecord>, DomainError> {
        self.check_available("find refresh record")?;
        let records = self.records.read().await;
        Ok(records.get(&token_id).cloned())
    }
}
