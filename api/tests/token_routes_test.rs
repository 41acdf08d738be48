//! Integration tests for the user and token endpoints

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use tk_api::app::create_app;
use tk_api::routes::AppState;
use tk_core::repositories::{MockTokenRepository, MockUserRepository};
use tk_core::services::{ManualClock, TokenService, TokenServiceConfig, UserService};

struct TestContext {
    state: web::Data<AppState<MockUserRepository, MockTokenRepository>>,
    tokens: MockTokenRepository,
    clock: ManualClock,
}

fn context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let tokens = MockTokenRepository::new();
    let clock = ManualClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap());

    let token_service = TokenService::new(
        users.clone(),
        Arc::new(tokens.clone()),
        TokenServiceConfig::default(),
    )
    .with_clock(Arc::new(clock.clone()));
    let user_service = UserService::new(users).with_clock(Arc::new(clock.clone()));

    TestContext {
        state: web::Data::new(AppState {
            token_service: Arc::new(token_service),
            user_service: Arc::new(user_service),
        }),
        tokens,
        clock,
    }
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_create_user_returns_created() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["joinDate"], "2023-11-14T22:13:20Z");
}

#[actix_web::test]
async fn test_issue_and_refresh_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": user["id"],
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let pair: Value = test::read_body_json(resp).await;
    let access_token = pair["accessToken"].as_str().unwrap().to_string();
    let refresh_token = pair["refreshToken"].as_str().unwrap().to_string();
    assert_eq!(access_token.split('.').count(), 3);
    assert_eq!(refresh_token.len(), 64);
    assert_eq!(ctx.tokens.len().await, 1);

    ctx.clock.advance(Duration::hours(2));

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens/refresh")
        .set_json(json!({
            "accessToken": access_token,
            "refreshSecret": refresh_token
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let refreshed = body["accessToken"].as_str().unwrap();
    assert_ne!(refreshed, access_token);

    // The refresh secret is also accepted under its issuance name
    let req = test::TestRequest::post()
        .uri("/api/v1/tokens/refresh")
        .set_json(json!({
            "accessToken": refreshed,
            "refreshToken": refresh_token
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_issue_rejects_invalid_lifetime() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": user["id"],
            "accessTokenLifetimeHours": 0,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_lifetime");
    assert!(ctx.tokens.is_empty().await);
}

#[actix_web::test]
async fn test_issue_for_unknown_user_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": Uuid::now_v7(),
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "user_not_found");
}

#[actix_web::test]
async fn test_issue_rejects_unparsable_body() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({ "userId": "not-a-uuid" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}

#[actix_web::test]
async fn test_refresh_failures_share_generic_code() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": user["id"],
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let pair: Value = test::call_and_read_body_json(&app, req).await;

    let attempts = [
        json!({ "accessToken": "not-a-token", "refreshSecret": pair["refreshToken"] }),
        json!({ "accessToken": pair["accessToken"], "refreshSecret": "wrong-secret" }),
    ];

    for attempt in attempts {
        let req = test::TestRequest::post()
            .uri("/api/v1/tokens/refresh")
            .set_json(attempt)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_token");
    }
}

#[actix_web::test]
async fn test_refresh_after_record_expiry() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": user["id"],
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let pair: Value = test::call_and_read_body_json(&app, req).await;

    ctx.clock.advance(Duration::hours(25));

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens/refresh")
        .set_json(json!({
            "accessToken": pair["accessToken"],
            "refreshSecret": pair["refreshToken"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "refresh_expired");
}

#[actix_web::test]
async fn test_refresh_rejects_empty_fields() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tokens/refresh")
        .set_json(json!({ "accessToken": "", "refreshSecret": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_datastore_failure_is_internal_error() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/users").to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;

    ctx.tokens.set_unavailable(true);
    let req = test::TestRequest::post()
        .uri("/api/v1/tokens")
        .set_json(json!({
            "userId": user["id"],
            "accessTokenLifetimeHours": 1,
            "refreshTokenLifetimeHours": 24
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "internal_error");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/nothing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
