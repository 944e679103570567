//! Place Title Value Object

use kernel::error::app_error::{AppError, AppResult};

/// Maximum title length
const TITLE_MAX_LENGTH: usize = 200;

/// Place title, non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::unprocessable("Title cannot be empty"));
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
