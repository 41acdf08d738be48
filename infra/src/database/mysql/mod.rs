//! MySQL-specific database implementations
//!
//! UUIDs are stored as their 36-character hyphenated text form.

pub mod token_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
