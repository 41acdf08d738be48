//! Shared configuration and common types for the TokenKeep server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by the HTTP layer

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig, TokenConfig,
    MAX_LIFETIME_HOURS,
};
pub use errors::{error_codes, ErrorResponse};
