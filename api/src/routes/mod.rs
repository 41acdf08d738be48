//! Route handlers and the state they share

pub mod tokens;
pub mod users;

use std::sync::Arc;

use tk_core::repositories::{TokenRepository, UserRepository};
use tk_core::services::{TokenService, UserService};

/// Application state that holds shared services
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub token_service: Arc<TokenService<U, T>>,
    pub user_service: Arc<UserService<U>>,
}
