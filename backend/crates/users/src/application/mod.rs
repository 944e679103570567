//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_users;
pub mod log_in;
pub mod sign_up;

// Re-exports
pub use config::UsersConfig;
pub use list_users::ListUsersUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
