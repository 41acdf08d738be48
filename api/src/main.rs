use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use tk_api::app::create_app;
use tk_api::routes::AppState;
use tk_core::services::{TokenService, TokenServiceConfig, UserService};
use tk_infra::database::{DatabasePool, MySqlTokenRepository, MySqlUserRepository};
use tk_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting TokenKeep API Server ({})", config.environment);

    let db = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the database")?;
    db.ensure_schema()
        .await
        .context("failed to create database schema")?;

    let users = Arc::new(MySqlUserRepository::new(db.get_pool().clone()));
    let tokens = Arc::new(MySqlTokenRepository::new(db.get_pool().clone()));

    let app_state = web::Data::new(AppState {
        token_service: Arc::new(TokenService::new(
            users.clone(),
            tokens,
            TokenServiceConfig::from(&config.token),
        )),
        user_service: Arc::new(UserService::new(users)),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    db.close().await;
    Ok(())
}
