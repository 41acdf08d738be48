//! Token issuance and refresh-token rotation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::{Header, Payload, RefreshRecord, TokenPair};
use crate::errors::{DomainError, ErrorClass, MalformedReason};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::clock::{Clock, SystemClock};
use crate::services::identity::IdentifierGenerator;

use super::codec;
use super::config::TokenServiceConfig;
use super::signer;

const ACCESS_LIFETIME_FIELD: &str = "accessTokenLifetimeHours";
const REFRESH_LIFETIME_FIELD: &str = "refreshTokenLifetimeHours";

/// Issues signed access tokens and rotates them against stored refresh records
///
/// Every access token is signed with the secret of the refresh record it
/// names in its `tid` claim, so rotation never needs a server-wide key.
pub struct TokenService<U: UserRepository, T: TokenRepository> {
    users: Arc<U>,
    tokens: Arc<T>,
    generator: IdentifierGenerator,
    clock: Arc<dyn Clock>,
    config: TokenServiceConfig,
}

impl<U: UserRepository, T: TokenRepository> TokenService<U, T> {
    /// Creates a token service using the system clock and OS entropy
    pub fn new(users: Arc<U>, tokens: Arc<T>, config: TokenServiceConfig) -> Self {
        Self {
            users,
            tokens,
            generator: IdentifierGenerator::new(),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_generator(mut self, generator: IdentifierGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Issue an access token and a refresh secret for an existing user
    ///
    /// # Arguments
    ///
    /// * `user_id` - Owner of the new token pair
    /// * `access_lifetime_hours` - Validity of the access token
    /// * `refresh_lifetime_hours` - Validity of the refresh record
    ///
    /// # Errors
    ///
    /// * `InvalidLifetime` - a lifetime is not positive, above the configured maximum,
    ///   or pushes an expiry past the representable time range
    /// * `UserNotFound` - no such user; nothing is persisted
    /// * `RandomSource` / `Datastore` - infrastructure failure
    pub async fn issue(
        &self,
        user_id: Uuid,
        access_lifetime_hours: i64,
        refresh_lifetime_hours: i64,
    ) -> Result<TokenPair, DomainError> {
        validate_lifetime(
            ACCESS_LIFETIME_FIELD,
            access_lifetime_hours,
            self.config.max_access_lifetime_hours,
        )?;
        validate_lifetime(
            REFRESH_LIFETIME_FIELD,
            refresh_lifetime_hours,
            self.config.max_refresh_lifetime_hours,
        )?;

        if !self.users.exists(user_id).await? {
            tracing::debug!(user_id = %user_id, "token issuance for unknown user");
            return Err(DomainError::UserNotFound { user_id });
        }

        let token_id = self.generator.new_opaque_id();
        let secret = self
            .generator
            .new_secret(self.config.refresh_secret_length)
            .map_err(|e| {
                tracing::error!(error = %e, "refresh secret generation failed");
                e
            })?;

        let now = self.clock.now();
        let payload = Payload::new(user_id, token_id, now, access_lifetime_hours).ok_or(
            DomainError::InvalidLifetime {
                field: ACCESS_LIFETIME_FIELD,
                hours: access_lifetime_hours,
            },
        )?;
        let access_token = seal(&payload, &secret);

        let record = RefreshRecord::new(token_id, user_id, secret, now, refresh_lifetime_hours)
            .ok_or(DomainError::InvalidLifetime {
                field: REFRESH_LIFETIME_FIELD,
                hours: refresh_lifetime_hours,
            })?;
        let record = self.tokens.insert(record).await?;

        tracing::info!(
            user_id = %user_id,
            token_id = %token_id,
            access_lifetime_hours,
            refresh_lifetime_hours,
            "issued token pair"
        );

        Ok(TokenPair::new(access_token, record.secret))
    }

    /// Exchange a (possibly expired) access token and its refresh secret for a fresh access token
    ///
    /// The new token keeps the user, the token ID and the lifetime of the old
    /// one. No refresh record is created or changed.
    pub async fn verify_and_refresh(
        &self,
        access_token: &str,
        refresh_secret: &str,
    ) -> Result<String, DomainError> {
        let result = self.rotate(access_token, refresh_secret).await;

        match &result {
            Ok(_) => {}
            Err(e) if e.class() == ErrorClass::Internal => {
                tracing::error!(code = e.code(), error = %e, "token refresh failed");
            }
            Err(e) => {
                tracing::warn!(code = e.code(), error = %e, "token refresh rejected");
            }
        }

        result
    }

    async fn rotate(&self, access_token: &str, refresh_secret: &str) -> Result<String, DomainError> {
        let decoded = codec::decode(access_token)?;
        let token_id = decoded.payload.tid;

        let record = self
            .tokens
            .find_by_id(token_id)
            .await?
            .ok_or(DomainError::UnknownToken { token_id })?;

        let now = self.clock.now();
        if record.is_expired_at(now) {
            return Err(DomainError::RefreshExpired {
                token_id,
                valid_until: record.valid_until,
            });
        }

        if !signer::constant_time_compare(&record.secret, refresh_secret) {
            return Err(DomainError::RefreshMismatch { token_id });
        }

        if !signer::verify(access_token, &record.secret) {
            return Err(DomainError::SignatureInvalid { token_id });
        }

        let old = &decoded.payload;
        let payload = old.rotated(now).ok_or_else(|| {
            DomainError::malformed(MalformedReason::InvalidWindow {
                iat: old.iat,
                exp: old.exp,
            })
        })?;

        tracing::info!(user_id = %payload.id, token_id = %token_id, "rotated access token");

        Ok(seal(&payload, &record.secret))
    }
}

fn validate_lifetime(field: &'static str, hours: i64, max_hours: i64) -> Result<(), DomainError> {
    if hours <= 0 || hours > max_hours {
        return Err(DomainError::InvalidLifetime { field, hours });
    }
    Ok(())
}

/// Encode and sign `payload` into a complete token string
fn seal(payload: &Payload, secret: &str) -> String {
    let (header, body) = codec::encode(&Header::hs512(), payload);
    let signature = signer::sign(&header, &body, secret);
    format!("{}.{}.{}", header, body, signature)
}
