use actix_web::{web, HttpResponse};

use tk_core::repositories::{TokenRepository, UserRepository};

use super::AppState;
use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/users
///
/// Registers a user that tokens can be issued for.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "018f4d5e-...",
///     "joinDate": "2024-05-01T12:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: datastore failure
pub async fn create_user<U, T>(state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    match state.user_service.create_user().await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
