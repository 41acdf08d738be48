//! # Infrastructure Layer
//!
//! Concrete implementations of the TokenKeep datastore:
//! - **Database**: MySQL connection pool, schema bootstrap and repositories using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
///
/// Raised while setting up the pool or schema. Repository calls report
/// failures as `DomainError::Datastore` instead.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
