//! Configuration for the token service

use tk_shared::{TokenConfig, MAX_LIFETIME_HOURS};

use crate::domain::entities::token::REFRESH_SECRET_LENGTH;

/// Limits the token service enforces on issuance
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Characters in each generated refresh secret
    pub refresh_secret_length: usize,
    /// Upper bound on requested access token lifetimes, in hours
    pub max_access_lifetime_hours: i64,
    /// Upper bound on requested refresh token lifetimes, in hours
    pub max_refresh_lifetime_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            refresh_secret_length: REFRESH_SECRET_LENGTH,
            max_access_lifetime_hours: 720,
            max_refresh_lifetime_hours: 8760,
        }
    }
}

/// Maximums are clamped to `1..=MAX_LIFETIME_HOURS`
impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            refresh_secret_length: config.refresh_secret_length,
            max_access_lifetime_hours: config.max_access_lifetime_hours.clamp(1, MAX_LIFETIME_HOURS),
            max_refresh_lifetime_hours: config
                .max_refresh_lifetime_hours
                .clamp(1, MAX_LIFETIME_HOURS),
        }
    }
}
