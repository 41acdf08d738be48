//! Business services containing domain logic and use cases.

pub mod clock;
pub mod identity;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use identity::{EntropySource, IdentifierGenerator, OsEntropy};
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;

#[cfg(any(test, feature = "mock"))]
pub use clock::ManualClock;
