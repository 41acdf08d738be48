//! Registration of new users

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::clock::{Clock, SystemClock};
use crate::services::identity::IdentifierGenerator;

/// Creates users that tokens can later be issued for
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
    generator: IdentifierGenerator,
    clock: Arc<dyn Clock>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self {
            users,
            generator: IdentifierGenerator::new(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a new user with a fresh ID, joined now
    pub async fn create_user(&self) -> Result<User, DomainError> {
        let user = User::new(self.generator.new_opaque_id(), self.clock.now());
        let user = self.users.create(user).await?;

        tracing::info!(user_id = %user.id, "created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use crate::services::clock::ManualClock;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_create_user_persists_record() {
        let repo = MockUserRepository::new();
        let joined = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let service = UserService::new(Arc::new(repo.clone()))
            .with_clock(Arc::new(ManualClock::new(joined)));

        let user = service.create_user().await.unwrap();

        assert_eq!(user.join_date, joined);
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert!(repo.exists(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_user_assigns_distinct_ids() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));

        let first = service.create_user().await.unwrap();
        let second = service.create_user().await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_user_propagates_datastore_failure() {
        let repo = MockUserRepository::new();
        repo.set_unavailable(true);
        let service = UserService::new(Arc::new(repo));

        let result = service.create_user().await;
        assert!(matches!(result, Err(DomainError::Datastore { .. })));
    }
}
