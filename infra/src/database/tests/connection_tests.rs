//! Unit tests for database connection pool

use tk_shared::DatabaseConfig;

use crate::database::connection::{DatabasePool, PoolStatistics};
use crate::database::schema;
use crate::InfrastructureError;

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    let config = DatabaseConfig::new("not a url");

    let result = DatabasePool::new(&config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_pool_health_check() {
    dotenvy::dotenv().ok();
    let config = DatabaseConfig::from_env().with_max_connections(2);

    let pool = DatabasePool::new(&config).await.unwrap();
    assert!(pool.health_check().await.unwrap());
    pool.ensure_schema().await.unwrap();
    // Idempotent
    pool.ensure_schema().await.unwrap();
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}

#[test]
fn test_schema_creates_both_tables_idempotently() {
    assert!(schema::STATEMENTS[0].contains("CREATE TABLE IF NOT EXISTS users"));
    assert!(schema::STATEMENTS[1].contains("CREATE TABLE IF NOT EXISTS refresh_tokens"));
    assert!(schema::CREATE_REFRESH_TOKENS_TABLE.contains("INDEX idx_refresh_tokens_user_id (user_id)"));
}
