//! Sign Up Use Case
//!
//! Creates a new user account and issues a bearer token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Path of the stored avatar image (written by the upload layer)
    pub image_path: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
    pub email: String,
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<UsersConfig>,
}

impl<R> SignUpUseCase<R>
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

    pub async fn execute(&self, input: SignUpInput) -> UserResult<SignUpOutput> {
        // Validate inputs; every failure early-returns before any write
        let name = UserName::new(input.name)
            .map_err(|e| UserError::Validation(e.message().to_string()))?;
        let email =
            Email::new(input.email).map_err(|e| UserError::Validation(e.message().to_string()))?;

        if self.repo.exists_by_email(&email).await? {
            return Err(UserError::EmailTaken);
        }

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| UserError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User::new(name, email, password_hash, input.image_path);

        self.repo.create(&user).await?;

        // Issue token last: if signing fails the user is already persisted
        // and has to log in to obtain a session
        let token = self
            .tokens
            .issue(user.user_id.into_uuid(), user.email.as_str())
            .map_err(|e| UserError::TokenIssue(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
            email: user.email.as_str().to_string(),
            token,
        })
    }
}
