//! Application factory
//!
//! Builds the Actix-web application from shared state. `main` and the
//! integration tests both go through `create_app`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use tk_core::repositories::{TokenRepository, UserRepository};
use tk_shared::{error_codes, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::routes::tokens::{issue_token, refresh_token};
use crate::routes::users::create_user;
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, T>(
    app_state: web::Data<AppState<U, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route("/users", web::post().to(create_user::<U, T>))
                .service(
                    web::scope("/tokens")
                        .route("", web::post().to(issue_token::<U, T>))
                        .route("/refresh", web::post().to(refresh_token::<U, T>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tokenkeep-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
