use actix_web::{web, HttpResponse};

use tk_core::repositories::{TokenRepository, UserRepository};

use crate::dto::{IssueTokenRequest, TokenPairResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/tokens
///
/// # Request Body
///
/// ```json
/// {
///     "userId": "018f4d5e-...",
///     "accessTokenLifetimeHours": 1,
///     "refreshTokenLifetimeHours": 24
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "64 alphanumeric characters"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: lifetime out of range or unparsable body
/// - 404 Not Found: unknown user
/// - 500 Internal Server Error: entropy or datastore failure
pub async fn issue_token<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<IssueTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    let request = request.into_inner();

    match state
        .token_service
        .issue(
            request.user_id,
            request.access_token_lifetime_hours,
            request.refresh_token_lifetime_hours,
        )
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
