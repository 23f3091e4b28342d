//! Configuration loading and types for poemify.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files (`load`)

mod load;
mod types;

use std::path::PathBuf;

pub use load::DEFAULT_CONFIG_FILE;
pub use types::{PoemConfig, TitleConfig};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("{0}")]
    Validation(String),
}

// =============================================================================
// Validation
// =============================================================================

impl PoemConfig {
    /// Check the values that end up inside HTML attributes or paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'source' must not be empty".to_string(),
            ));
        }

        let attributes = [
            ("font", &self.font),
            ("cover", &self.cover),
            ("background", &self.background),
        ];
        for (field, value) in attributes {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "invalid config: '{field}' must not be empty"
                )));
            }
            if value.contains('"') {
                return Err(ConfigError::Validation(format!(
                    "invalid config: '{field}' must not contain double quotes"
                )));
            }
        }

        Ok(())
    }
}
