//! Log In Use Case
//!
//! Verifies credentials and issues a bearer token.
//!
//! Unknown email and wrong password both fail with
//! [`UserError::InvalidCredentials`] (403) so responses do not reveal
//! whether an email is registered.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::{ClearTextPassword, equalize_verification_cost};
use platform::token::TokenService;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{UserError, UserResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    pub user_id: UserId,
    pub email: String,
    pub token: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<UsersConfig>,
}

impl<R> LogInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<UsersConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LogInInput) -> UserResult<LogInOutput> {
        let password =
            ClearTextPassword::new(input.password).map_err(|_| UserError::InvalidCredentials)?;

        // A malformed email cannot belong to any account
        let user = match Email::new(input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            // Same Argon2 work as a real verification; an unknown email
            // must not be cheaper than a wrong password
            equalize_verification_cost(&password, self.config.pepper());
            return Err(UserError::InvalidCredentials);
        };

        // A mismatch is `false`; only a broken stored hash is an error
        let password_valid = user
            .password_hash
            .verify(&password, self.config.pepper())
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        if !password_valid {
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.user_id.into_uuid(), user.email.as_str())
            .map_err(|e| UserError::TokenIssue(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LogInOutput {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
            token,
        })
    }
}
