//! Request and response bodies (camelCase on the wire)

pub mod token;
pub mod user;

pub use token::{IssueTokenRequest, RefreshTokenRequest, RefreshTokenResponse, TokenPairResponse};
pub use user::UserResponse;
