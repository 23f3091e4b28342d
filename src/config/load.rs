//! Configuration loading from files.
//!
//! This module handles reading and parsing configuration files.

use std::path::Path;

use super::{ConfigError, PoemConfig};

/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "poemify.yaml";

impl PoemConfig {
    /// Load the config from the command line argument, defaulting to `poemify.yaml`.
    ///
    /// The default file is optional and falls back to built-in values. A file
    /// named explicitly must exist.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = config_file.is_some();
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        if explicit && !config_file.is_file() {
            return Err(ConfigError::NotFound(config_file));
        }

        Self::load_from_file(&config_file)
    }

    /// Load the config from a file path, using defaults if it does not exist.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(false))
            .build()?
            .try_deserialize::<PoemConfig>()?;

        config.validate()?;
        Ok(config)
    }
}
