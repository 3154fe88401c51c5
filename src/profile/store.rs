//! Profile configuration file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::profile as profile_config;
use crate::error::TabError;

use super::models::ProfileConfig;

/// Reads the profile configuration file
pub struct ProfileStore {
    config_path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a new store using the default path (~/.tabmove/config.json)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(profile_config::DIR_NAME)
            .join(profile_config::FILE_NAME)
    }

    /// Load the profile configuration from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<ProfileConfig, TabError> {
        if !self.config_path.exists() {
            return Ok(ProfileConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            TabError::Config(format!(
                "Failed to read profile config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            TabError::Config(format!(
                "Failed to parse profile config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }
}
