//! Application Configuration
//!
//! Configuration for the Places application layer.

use std::path::PathBuf;

/// Places application configuration
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Directory where place images are stored
    pub upload_dir: PathBuf,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads/images"),
        }
    }
}

impl PlacesConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }
}
