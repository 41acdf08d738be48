//! Token issuance configuration

use serde::{Deserialize, Serialize};

/// Ceiling for either lifetime maximum, in hours (100 years)
pub const MAX_LIFETIME_HOURS: i64 = 876_000;

/// Limits applied when issuing access/refresh token pairs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Number of characters in a generated refresh secret
    #[serde(default = "default_refresh_secret_length")]
    pub refresh_secret_length: usize,

    /// Largest access token lifetime a caller may request, in hours
    #[serde(default = "default_max_access_lifetime_hours")]
    pub max_access_lifetime_hours: i64,

    /// Largest refresh token lifetime a caller may request, in hours
    #[serde(default = "default_max_refresh_lifetime_hours")]
    pub max_refresh_lifetime_hours: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            refresh_secret_length: default_refresh_secret_length(),
            max_access_lifetime_hours: default_max_access_lifetime_hours(),
            max_refresh_lifetime_hours: default_max_refresh_lifetime_hours(),
        }
    }
}

impl TokenConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let refresh_secret_length = std::env::var("TOKEN_REFRESH_SECRET_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|len: &usize| *len > 0)
            .unwrap_or_else(default_refresh_secret_length);
        let max_access_lifetime_hours = lifetime_limit(
            std::env::var("TOKEN_MAX_ACCESS_LIFETIME_HOURS").ok().as_deref(),
            default_max_access_lifetime_hours(),
        );
        let max_refresh_lifetime_hours = lifetime_limit(
            std::env::var("TOKEN_MAX_REFRESH_LIFETIME_HOURS").ok().as_deref(),
            default_max_refresh_lifetime_hours(),
        );

        Self {
            refresh_secret_length,
            max_access_lifetime_hours,
            max_refresh_lifetime_hours,
        }
    }

    /// Set the maximum access token lifetime in hours
    pub fn with_max_access_lifetime_hours(mut self, hours: i64) -> Self {
        self.max_access_lifetime_hours = hours;
        self
    }

    /// Set the maximum refresh token lifetime in hours
    pub fn with_max_refresh_lifetime_hours(mut self, hours: i64) -> Self {
        self.max_refresh_lifetime_hours = hours;
        self
    }
}

/// Parse a lifetime maximum, capped at [`MAX_LIFETIME_HOURS`]
///
/// Missing, unparsable or non-positive values fall back to `default`.
fn lifetime_limit(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|hours| *hours > 0)
        .map_or(default, |hours| hours.min(MAX_LIFETIME_HOURS))
}

fn default_refresh_secret_length() -> usize {
    64
}

fn default_max_access_lifetime_hours() -> i64 {
    720 // 30 days
}

fn default_max_refresh_lifetime_hours() -> i64 {
    8760 // 365 days
}
