//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the Users router with PostgreSQL repository
pub fn users_router(
    repo: PgUserRepository,
    tokens: Arc<TokenService>,
    config: UsersConfig,
) -> Router {
    let state = UsersAppState {
        repo: Arc::new(repo),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_users::<PgUserRepository>))
        .route("/signup", post(handlers::sign_up::<PgUserRepository>))
        .route("/login", post(handlers::log_in::<PgUserRepository>))
        .with_state(state)
}

/// Create a generic Users router for any repository implementation
pub fn users_router_generic<R>(repo: R, tokens: Arc<TokenService>, config: UsersConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_users::<R>))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .with_state(state)
}
