//! Configuration data structures for focusd.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to the functions in [`super::defaults`]; unknown
//! fields are rejected during deserialization.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use focusd_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/focusd.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/focusd.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The format for log output.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Configuration for the desktop-entry registry adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Additional directories to search for `.desktop` entries, consulted
    /// after the standard XDG data directories.
    #[serde(default = "defaults::default_extra_data_dirs")]
    pub extra_data_dirs: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            extra_data_dirs: defaults::default_extra_data_dirs(),
        }
    }
}

/// Root configuration structure for the focusd daemon.
///
/// # Examples
///
/// ```
/// use focusd_core::config::CoreConfig;
///
/// let core_config = CoreConfig::default();
/// assert_eq!(core_config.logging.level, "info");
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
/// format = "json"
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.logging.file_path, None);
/// assert!(loaded.registry.extra_data_dirs.is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Configuration for the desktop-entry registry adapter.
    #[serde(default)]
    pub registry: RegistryConfig,
}
