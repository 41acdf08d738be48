//! Identifier generator: opaque record IDs and high-entropy secrets
//!
//! Secrets are drawn from an `EntropySource`; the operating-system RNG is the
//! production source. A failing source surfaces as
//! `DomainError::RandomSource` and is never replaced by a weaker one.

mod entropy;
mod generator;


pub use entropy::{EntropySource, OsEntropy};
pub use generator::{IdentifierGenerator, SECRET_ALPHABET};
