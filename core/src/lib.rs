//! # TokenKeep Core
//!
//! Domain layer for TokenKeep: signed access tokens bound to stored refresh
//! records, the services that issue and rotate them, and the repository
//! interfaces they persist through.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Header, Payload, RefreshRecord, TokenPair, User};
pub use errors::{DomainError, DomainResult, ErrorClass, MalformedReason, TokenPart};
pub use repositories::{TokenRepository, UserRepository};
pub use services::{Clock, IdentifierGenerator, SystemClock, TokenService, TokenServiceConfig, UserService};

#[cfg(any(test, feature = "mock"))]
pub use repositories::{MockTokenRepository, MockUserRepository};
#[cfg(any(test, feature = "mock"))]
pub use services::ManualClock;
