//! Unit tests for mock user repository implementation

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_create_and_exists() {
    let repo = MockUserRepository::new();
    let user = User::new(Uuid::now_v7(), Utc::now());

    repo.create(user.clone()).await.unwrap();

    assert!(repo.exists(user.id).await.unwrap());
    assert!(!repo.exists(Uuid::now_v7()).await.unwrap());
    assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user));
}

#[tokio::test]
async fn test_duplicate_user_is_rejected() {
    let repo = MockUserRepository::new();
    let user = User::new(Uuid::now_v7(), Utc::now());

    repo.create(user.clone()).await.unwrap();
    assert!(repo.create(user).await.is_err());
}
