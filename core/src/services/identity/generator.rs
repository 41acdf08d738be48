//! Opaque ID and secret string generation

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::DomainError;

use super::entropy::{EntropySource, OsEntropy};

/// The 62 symbols a secret is drawn from
pub const SECRET_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bytes at or above this value are rejected so `byte % 62` stays uniform (62 * 4)
const REJECTION_THRESHOLD: u8 = 248;

/// Bytes requested from the entropy source per draw
const DRAW_SIZE: usize = 64;

/// Generates primary keys and refresh secrets
#[derive(Clone)]
pub struct IdentifierGenerator {
    entropy: Arc<dyn EntropySource>,
}

impl IdentifierGenerator {
    /// Generator backed by the operating-system RNG
    pub fn new() -> Self {
        Self::with_entropy(Arc::new(OsEntropy))
    }

    pub fn with_entropy(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Globally unique identifier that sorts by creation time (UUIDv7)
    pub fn new_opaque_id(&self) -> Uuid {
        Uuid::now_v7()
    }

    /// Secret of exactly `length` characters drawn uniformly from [`SECRET_ALPHABET`]
    ///
    /// # Errors
    ///
    /// `DomainError::RandomSource` if the entropy source fails.
    pub fn new_secret(&self, length: usize) -> Result<String, DomainError> {
        let mut secret = String::with_capacity(length);
        let mut draw = [0u8; DRAW_SIZE];

        while secret.len() < length {
            self.entropy
                .fill(&mut draw)
                .map_err(DomainError::RandomSource)?;

            for &byte in draw.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
                secret.push(SECRET_ALPHABET[usize::from(byte) % SECRET_ALPHABET.len()] as char);
                if secret.len() == length {
                    break;
                }
            }
        }

        Ok(secret)
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}
