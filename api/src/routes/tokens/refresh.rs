use actix_web::{web, HttpResponse};
use validator::Validate;

use tk_core::repositories::{TokenRepository, UserRepository};

use crate::dto::{RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};
use crate::routes::AppState;

/// Handler for POST /api/v1/tokens/refresh
///
/// Exchanges an access token (expired or not) and its refresh secret for a
/// new access token with the same lifetime.
///
/// # Request Body
///
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshSecret": "..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or empty fields
/// - 401 Unauthorized: `refresh_expired`, or `invalid_token` for every other rejection
/// - 500 Internal Server Error: datastore failure
pub async fn refresh_token<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .token_service
        .verify_and_refresh(&request.access_token, &request.refresh_secret)
        .await
    {
        Ok(access_token) => HttpResponse::Ok().json(RefreshTokenResponse { access_token }),
        Err(error) => handle_domain_error(error),
    }
}
