//! Token entities for signed access tokens and persisted refresh records.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Algorithm named in every issued header (HMAC-SHA-512)
pub const SIGNING_ALGORITHM: &str = "HS512";

/// Type tag named in every issued header
pub const TOKEN_TYPE: &str = "JWT";

/// Default number of characters in a refresh secret
pub const REFRESH_SECRET_LENGTH: usize = 64;

pub const SECONDS_PER_HOUR: i64 = 3600;

/// First part of a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Signing algorithm name
    pub alg: String,

    /// Token type tag
    pub typ: String,
}

impl Header {
    /// The only header this service issues or accepts
    pub fn hs512() -> Self {
        Self {
            alg: SIGNING_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.alg == SIGNING_ALGORITHM && self.typ == TOKEN_TYPE
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs512()
    }
}

/// Claims embedded in an access token
///
/// Timestamps are integer seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Owning user ID
    pub id: Uuid,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Token ID, the key of the refresh record whose secret signs this token
    pub tid: Uuid,
}

impl Payload {
    /// Creates claims valid for `lifetime_hours` starting at `issued_at`
    ///
    /// Returns `None` when the expiry does not fit in epoch seconds.
    pub fn new(
        user_id: Uuid,
        token_id: Uuid,
        issued_at: DateTime<Utc>,
        lifetime_hours: i64,
    ) -> Option<Self> {
        let iat = issued_at.timestamp();
        let exp = lifetime_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|window| iat.checked_add(window))?;
        Some(Self {
            id: user_id,
            iat,
            exp,
            tid: token_id,
        })
    }

    /// Length of the validity window in whole hours, rounded up
    ///
    /// Returns `None` when `exp` is not after `iat`.
    pub fn lifetime_hours(&self) -> Option<i64> {
        let window = self.exp.checked_sub(self.iat)?;
        if window <= 0 {
            return None;
        }
        Some(window / SECONDS_PER_HOUR + i64::from(window % SECONDS_PER_HOUR != 0))
    }

    /// Re-issues these claims at `now`, keeping user, token ID and window length
    pub fn rotated(&self, now: DateTime<Utc>) -> Option<Self> {
        let hours = self.lifetime_hours()?;
        Self::new(self.id, self.tid, now, hours)
    }
}

/// Refresh record persisted in the `tokens` collection
///
/// The secret both proves refresh ownership and keys the HMAC of every
/// access token carrying this record's ID. Records are never mutated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRecord {
    /// Token ID, equal to the `tid` claim of the access tokens it signs
    pub id: Uuid,

    /// User ID this record belongs to
    pub user_id: Uuid,

    /// Plaintext refresh secret
    pub secret: String,

    /// Timestamp after which the record can no longer rotate tokens
    pub valid_until: DateTime<Utc>,

    /// Timestamp when the record was created
    pub issued_at: DateTime<Utc>,
}

impl RefreshRecord {
    /// Creates a record valid for `lifetime_hours` starting at `issued_at`
    ///
    /// Returns `None` when `valid_until` would fall outside the representable range.
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        secret: String,
        issued_at: DateTime<Utc>,
        lifetime_hours: i64,
    ) -> Option<Self> {
        let valid_until = Duration::try_hours(lifetime_hours)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))?;
        Some(Self {
            id,
            user_id,
            secret,
            valid_until,
            issued_at,
        })
    }

    /// A record is expired once `valid_until` is strictly in the past
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until < now
    }
}

impl fmt::Debug for RefreshRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshRecord")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("secret", &"<redacted>")
            .field("valid_until", &self.valid_until)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Token pair returned to the client on issuance
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Encoded, signed access token
    pub access_token: String,

    /// Plaintext refresh secret
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}
