//! Error handling for the focusd core layer.
//!
//! This module defines the error types used throughout the core library,
//! built with the `thiserror` crate. The main error type is [`CoreError`],
//! which encapsulates more specific errors like [`ConfigError`] and
//! [`LoggingError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusd.
///
/// Common error type for the core layer, usually wrapping a more specific
/// error from one of the subsystems.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// General I/O errors not covered by more specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors due to invalid input provided to a function or method.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while parsing a configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A configuration value failed validation after successful parsing.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. the XDG config home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
///
/// Produced during logging setup and wrapped into
/// [`CoreError::LoggingInitialization`] at the API boundary.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// Failed to build a log filter from a configuration string.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred during logging setup, such as failing to open
    /// the log file.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
