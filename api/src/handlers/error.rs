use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use tk_core::errors::{DomainError, ErrorClass};
use tk_shared::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Authentication failures collapse into `invalid_token` so a caller cannot
/// probe which check rejected the token. Expired refresh records keep their
/// own code so clients know to authenticate again.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error.class() {
        ErrorClass::Internal => log::error!("Domain error [{}]: {}", error.code(), error),
        ErrorClass::Authentication => log::warn!("Domain error [{}]: {}", error.code(), error),
        ErrorClass::ClientInput => log::debug!("Domain error [{}]: {}", error.code(), error),
    }

    let (status, body) = match &error {
        DomainError::InvalidLifetime { .. } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::INVALID_LIFETIME, error.to_string()),
        ),
        DomainError::UserNotFound { .. } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::USER_NOT_FOUND, "User not found"),
        ),
        DomainError::RefreshExpired { .. } => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::REFRESH_EXPIRED, "Refresh token has expired"),
        ),
        DomainError::MalformedToken { .. }
        | DomainError::UnknownToken { .. }
        | DomainError::RefreshMismatch { .. }
        | DomainError::SignatureInvalid { .. } => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::INVALID_TOKEN, "Invalid token"),
        ),
        DomainError::RandomSource(_) | DomainError::Datastore { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        ),
    };

    HttpResponse::build(status).json(body)
}

/// 400 response listing the fields that failed validation
pub fn handle_validation_error(errors: ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed");
    for (field, _) in errors.field_errors() {
        body = body.add_detail(field.to_string(), "invalid");
    }
    HttpResponse::BadRequest().json(body)
}

/// Turns unparsable JSON bodies into the standard error body
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", error);
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, "Request body is not valid JSON for this endpoint"));
    actix_web::error::InternalError::from_response(error, response).into()
}
