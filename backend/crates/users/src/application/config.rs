//! Application Configuration
//!
//! Configuration for the Users application layer.

use std::path::PathBuf;

/// Users application configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Directory where avatar images are stored
    pub upload_dir: PathBuf,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads/images"),
            password_pepper: None,
        }
    }
}

impl UsersConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
