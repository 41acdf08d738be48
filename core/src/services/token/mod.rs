//! Token service module
//!
//! This module handles:
//! - Encoding and decoding the three-part token format
//! - HMAC-SHA-512 signing with per-record refresh secrets
//! - Issuing token pairs and rotating access tokens

pub mod codec;
pub mod signer;

mod config;
mod service;


pub use codec::DecodedToken;
pub use config::TokenServiceConfig;
pub use service::TokenService;
