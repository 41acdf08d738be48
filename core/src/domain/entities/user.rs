//! User entity representing a registered identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
///
/// Tokens are only ever issued for users that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Timestamp when the user joined
    pub join_date: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, join_date: DateTime<Utc>) -> Self {
        Self { id, join_date }
    }
}
