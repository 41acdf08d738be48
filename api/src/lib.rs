//! HTTP transport for TokenKeep
//!
//! Exposes user registration, token issuance and token refresh over JSON.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
