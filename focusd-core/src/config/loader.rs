//! Configuration loading for focusd.
//!
//! Provides the [`ConfigLoader`], responsible for locating, parsing, and
//! validating the daemon's `config.toml`. A missing file is not an error:
//! the default configuration is used instead, matching the rule that the
//! configuration is ambient and never part of the service contract.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use directories_next::ProjectDirs;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

/// Name of the configuration file inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `ConfigLoader` provides static methods to load and validate [`CoreConfig`].
///
/// An empty struct used as a namespace for configuration loading logic.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the application's XDG
    /// configuration directory.
    ///
    /// Steps:
    /// 1. Resolve the config directory for `com.dotfiles.focusd`.
    /// 2. Read `config.toml` if present; fall back to defaults when absent.
    /// 3. Parse the TOML content into a [`CoreConfig`].
    /// 4. Validate the result (log level and format membership).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` when the config directory cannot be
    /// determined, the file exists but cannot be read or parsed, or a value
    /// fails validation.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let project_dirs = ProjectDirs::from("com", "dotfiles", "focusd").ok_or_else(|| {
            ConfigError::DirectoryUnavailable {
                dir_type: "XDG config home".to_string(),
            }
        })?;
        let config_path = project_dirs.config_dir().join(CONFIG_FILE_NAME);
        Self::load_from_path(&config_path)
    }

    /// Loads and validates the configuration from an explicit path.
    ///
    /// Used by [`Self::load`] and directly by tests.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Self::validate_config(CoreConfig::default());
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into());
            }
        };

        let config: CoreConfig =
            toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Self::validate_config(config)
    }

    /// Validates a loaded (or default) configuration.
    ///
    /// Log level and format are lowercased and checked against the accepted
    /// sets; anything else is a validation error rather than a silent
    /// fallback.
    fn validate_config(mut config: CoreConfig) -> Result<CoreConfig, CoreError> {
        let level = config.logging.level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level '{}'. Expected one of: trace, debug, info, warn, error.",
                    other
                ))
                .into());
            }
        }

        let format = config.logging.format.to_lowercase();
        match format.as_str() {
            "text" | "json" => config.logging.format = format,
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format '{}'. Expected 'text' or 'json'.",
                    other
                ))
                .into());
            }
        }

        Ok(config)
    }
}
