//! Users Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Users-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// Users-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Request input failed validation
    #[error("Invalid inputs passed: {0}")]
    Validation(String),

    /// Email already registered
    #[error("User already exists, please login instead")]
    EmailTaken,

    /// Unknown email or wrong password; deliberately the same message for
    /// both so the response does not reveal whether the email exists
    #[error("Invalid credentials, could not log you in")]
    InvalidCredentials,

    /// User not found
    #[error("Could not find a user for the provided id")]
    UserNotFound,

    /// Password hashing primitive failed (not a mismatch)
    #[error("Could not create user, please try again")]
    Hashing(String),

    /// Token signing failed; on signup the user is already persisted and
    /// must log in to obtain a session
    #[error("Could not issue a session token, please log in")]
    TokenIssue(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Duplicate email maps to 422 like any other rejected signup input
            UserError::Validation(_) | UserError::EmailTaken => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::InvalidCredentials => StatusCode::FORBIDDEN,
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::Hashing(_)
            | UserError::TokenIssue(_)
            | UserError::Database(_)
            | UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) | UserError::EmailTaken => ErrorKind::UnprocessableEntity,
            UserError::InvalidCredentials => ErrorKind::Forbidden,
            UserError::UserNotFound => ErrorKind::NotFound,
            UserError::Hashing(_)
            | UserError::TokenIssue(_)
            | UserError::Database(_)
            | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UserError::Hashing(msg) => {
                tracing::error!(message = %msg, "Password hashing failed");
            }
            UserError::TokenIssue(msg) => {
                tracing::error!(message = %msg, "Token signing failed");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Users error");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for UserError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                UserError::Validation(err.message().to_string())
            }
            _ => UserError::Internal(err.to_string()),
        }
    }
}
