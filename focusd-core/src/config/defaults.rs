//! Default configuration values for focusd.
//!
//! These functions back `serde`'s `default` attributes in the configuration
//! structures, providing the values used when a field is not specified in the
//! configuration file.

use std::path::PathBuf;

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None // No log file by default
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default extra desktop-entry search paths (empty).
pub(super) fn default_extra_data_dirs() -> Vec<PathBuf> {
    Vec::new()
}
