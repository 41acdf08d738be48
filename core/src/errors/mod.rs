//! Domain error taxonomy for token issuance and rotation.

mod types;


pub use types::{ErrorClass, MalformedReason, TokenPart};

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Boxed error raised by a Datastore collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure the token subsystem can report
///
/// The variants are a closed set so callers branch on kind rather than on
/// message text. None of them is retried internally.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid {field}: {hours} hours")]
    InvalidLifetime { field: &'static str, hours: i64 },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: Uuid },

    #[error("Malformed token: {reason}")]
    MalformedToken { reason: MalformedReason },

    #[error("Unknown token id: {token_id}")]
    UnknownToken { token_id: Uuid },

    #[error("Refresh token {token_id} expired at {valid_until}")]
    RefreshExpired {
        token_id: Uuid,
        valid_until: DateTime<Utc>,
    },

    #[error("Refresh secret does not match token {token_id}")]
    RefreshMismatch { token_id: Uuid },

    #[error("Signature verification failed for token {token_id}")]
    SignatureInvalid { token_id: Uuid },

    #[error("Entropy source failure: {0}")]
    RandomSource(#[source] rand::Error),

    #[error("Datastore error during {operation}: {source}")]
    Datastore {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl DomainError {
    /// Wrap a collaborator failure raised while performing `operation`
    pub fn datastore(operation: &'static str, source: impl Into<BoxError>) -> Self {
        DomainError::Datastore {
            operation,
            source: source.into(),
        }
    }

    pub fn malformed(reason: MalformedReason) -> Self {
        DomainError::MalformedToken { reason }
    }

    /// Status class the Transport maps to a protocol-level status
    pub fn class(&self) -> ErrorClass {
        match self {
            DomainError::InvalidLifetime { .. } | DomainError::UserNotFound { .. } => {
                ErrorClass::ClientInput
            }
            DomainError::MalformedToken { .. }
            | DomainError::UnknownToken { .. }
            | DomainError::RefreshExpired { .. }
            | DomainError::RefreshMismatch { .. }
            | DomainError::SignatureInvalid { .. } => ErrorClass::Authentication,
            DomainError::RandomSource(_) | DomainError::Datastore { .. } => ErrorClass::Internal,
        }
    }

    /// Stable machine-readable kind, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidLifetime { .. } => "INVALID_LIFETIME",
            DomainError::UserNotFound { .. } => "USER_NOT_FOUND",
            DomainError::MalformedToken { .. } => "MALFORMED_TOKEN",
            DomainError::UnknownToken { .. } => "UNKNOWN_TOKEN",
            DomainError::RefreshExpired { .. } => "REFRESH_EXPIRED",
            DomainError::RefreshMismatch { .. } => "REFRESH_MISMATCH",
            DomainError::SignatureInvalid { .. } => "SIGNATURE_INVALID",
            DomainError::RandomSource(_) => "RANDOM_SOURCE",
            DomainError::Datastore { .. } => "DATASTORE",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
