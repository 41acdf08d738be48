use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tk_core::domain::entities::token::TokenPair;

/// Body of POST /api/v1/tokens
///
/// Lifetime bounds are enforced by the token service so they surface as
/// `invalid_lifetime` rather than a generic validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    pub user_id: Uuid,
    pub access_token_lifetime_hours: i64,
    pub refresh_token_lifetime_hours: i64,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub access_token: String,
    #[serde(alias = "refreshToken")]
    #[validate(length(min = 1))]
    pub refresh_secret: String,
}

impl std::fmt::Debug for RefreshTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenRequest")
            .field("access_token", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_request_uses_camel_case() {
        let user_id = Uuid::now_v7();
        let request: IssueTokenRequest = serde_json::from_value(json!({
            "userId": user_id,
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .unwrap();

        assert_eq!(request.user_id, user_id);
        assert_eq!(request.access_token_lifetime_hours, 1);
        assert_eq!(request.refresh_token_lifetime_hours, 24);
    }

    #[test]
    fn test_refresh_request_accepts_refresh_token_alias() {
        let request: RefreshTokenRequest = serde_json::from_value(json!({
            "accessToken": "a.b.c",
            "refreshToken": "secret"
        }))
        .unwrap();

        assert_eq!(request.refresh_secret, "secret");
    }

    #[test]
    fn test_refresh_request_rejects_empty_fields() {
        let request = RefreshTokenRequest {
            access_token: String::new(),
            refresh_secret: "s3cr3t-value".to_string(),
        };
        assert!(request.validate().is_err());
        assert!(!format!("{:?}", request).contains("s3cr3t-value"));
    }

    #[test]
    fn test_token_pair_response_serializes_camel_case() {
        let response = TokenPairResponse::from(TokenPair::new("a.b.c".into(), "s3cr3t".into()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["accessToken"], "a.b.c");
        assert_eq!(json["refreshToken"], "s3cr3t");
    }
}
