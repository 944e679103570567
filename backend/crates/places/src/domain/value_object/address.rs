//! Postal Address Value Object

use kernel::error::app_error::{AppError, AppResult};

/// Maximum address length
const ADDRESS_MAX_LENGTH: usize = 500;

/// Free-form postal address as entered by the user; the geocoder turns it
/// into coordinates, the original text is kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> AppResult<Self> {
        let address = address.into().trim().to_string();

        if address.is_empty() {
            return Err(AppError::unprocessable("Address cannot be empty"));
        }

        if address.chars().count() > ADDRESS_MAX_LENGTH {
            return Err(AppError::unprocessable(format!(
                "Address must be at most {} characters",
                ADDRESS_MAX_LENGTH
            )));
        }

        Ok(Self(address))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        let a = Address::new(" 20 W 34th St, New York, NY 10001 ").unwrap();
        assert_eq!(a.as_str(), "20 W 34th St, New York, NY 10001");
    }

    #[test]
    fn test_address_empty() {
        assert!(Address::new("").is_err());
        assert!(Address::new("  ").is_err());
    }

    #[test]
    fn test_address_too_long() {
        assert!(Address::new("x".repeat(501)).is_err());
    }
}
