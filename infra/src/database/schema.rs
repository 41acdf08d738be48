//! Table definitions created at startup

/// `users` collection
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        join_date DATETIME(6) NOT NULL
    )
"#;

/// `tokens` collection; `id` equals the `tid` claim of the access tokens it signs
pub const CREATE_REFRESH_TOKENS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS refresh_tokens (
        id CHAR(36) NOT NULL PRIMARY KEY,
        user_id CHAR(36) NOT NULL,
        secret VARCHAR(255) NOT NULL,
        valid_until DATETIME(6) NOT NULL,
        issued_at DATETIME(6) NOT NULL,
        INDEX idx_refresh_tokens_user_id (user_id)
    )
"#;

/// Statements in the order they must run
pub const STATEMENTS: [&str; 2] = [CREATE_USERS_TABLE, CREATE_REFRESH_TOKENS_TABLE];
