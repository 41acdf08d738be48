//! Token route handlers
//!
//! - Issuing an access token / refresh secret pair
//! - Rotating an access token with its refresh secret

pub mod create;
pub mod refresh;

pub use create::issue_token;
pub use refresh::refresh_token;
