//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for the `users` collection
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Insert failed
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether a user with this ID exists
    ///
    /// The default implementation goes through `find_by_id`; stores that can
    /// answer existence more cheaply should override it.
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
