//! Cryptographically secure byte sources

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of random bytes for secret generation
///
/// Implementations must be safe to share across request handlers without
/// external locking.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely with random bytes or report why it could not
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Operating-system RNG (`getrandom`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}
