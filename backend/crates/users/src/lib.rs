//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup with name + email + password + avatar image
//! - Login returning a signed bearer token (1-hour expiry)
//! - User listing with owned place ids, password hashes never exposed
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Stateless HMAC-signed bearer tokens (platform::token)
//! - Login failures are indistinguishable for unknown email and wrong
//!   password (no account enumeration)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
