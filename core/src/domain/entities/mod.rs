//! Domain entities representing core business objects.

pub mod token;
pub mod user;


// Re-export commonly used types
pub use token::{
    Header, Payload, RefreshRecord, TokenPair,
    REFRESH_SECRET_LENGTH, SECONDS_PER_HOUR, SIGNING_ALGORITHM, TOKEN_TYPE,
};
pub use user::User;
