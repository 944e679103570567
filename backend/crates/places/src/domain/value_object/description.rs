//! Place Description Value Object

use kernel::error::app_error::{AppError, AppResult};

/// Minimum description length
const DESCRIPTION_MIN_LENGTH: usize = 5;

/// Maximum description length
const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// Place description, at least five characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(description: impl Into<String>) -> AppResult<Self> {
        let description = description.into().trim().to_string();

        if description.chars().count() < DESCRIPTION_MIN_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Description must be at least {} characters",
                DESCRIPTION_MIN_LENGTH
            )));
        }

        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Description must be at most {} characters",
                DESCRIPTION_MAX_LENGTH
            )));
        }

        Ok(Self(description))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_valid() {
        let d = Description::new("One of the most famous sky scrapers in the world!").unwrap();
        assert!(d.as_str().starts_with("One of"));
    }

    #[test]
    fn test_description_too_short() {
        assert!(Description::new("four").is_err());
        assert!(Description::new("     ").is_err());
        assert!(Description::new("fives").is_ok());
    }

    #[test]
    fn test_description_too_long() {
        assert!(Description::new("x".repeat(2001)).is_err());
    }
}
