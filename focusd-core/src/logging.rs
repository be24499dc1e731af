//! Logging system for focusd.
//!
//! A configurable logging setup built on the `tracing` ecosystem. It supports
//! console output and optional file logging, each in text or JSON format,
//! driven by the [`LoggingConfig`] section of the daemon configuration.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before the configuration is loaded, or
/// as a fallback when full logging initialization fails. Filters via the
/// `RUST_LOG` environment variable, defaulting to "info". Errors (e.g. a
/// global logger already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds an `EnvFilter` from the configured level string.
fn build_env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level)
        .map_err(|e| LoggingError::FilterError(format!("invalid log level '{}': {}", level, e)))
}

/// Creates a file logging layer.
///
/// Ensures the parent directory for the log file exists, opens the file in
/// append mode, and configures the log format (text or JSON, never ANSI).
fn create_file_layer(
    log_path: &Path,
    format: &str,
    filter: EnvFilter,
) -> Result<Box<dyn Layer<Registry> + Send + Sync + 'static>, LoggingError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    let writer = Arc::new(file);

    let layer = match format {
        "json" => fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter)
            .boxed(),
    };
    Ok(layer)
}

/// Initializes the global logging system based on the provided [`LoggingConfig`].
///
/// Installs a console layer and, when `file_path` is set, a file layer, each
/// filtered at the configured level.
///
/// # Errors
///
/// Returns `CoreError::LoggingInitialization` if the level string does not
/// parse, the log file cannot be opened, or a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();

    let stdout_filter =
        build_env_filter(&config.level).map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;
    let stdout_layer = match config.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false) // No ANSI for JSON output
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };
    layers.push(stdout_layer);

    if let Some(log_path) = &config.file_path {
        let file_filter = build_env_filter(&config.level)
            .map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;
        let file_layer = create_file_layer(log_path, &config.format, file_filter)
            .map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;
        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| CoreError::LoggingInitialization(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        format = %config.format,
        "logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn env_filter_accepts_configured_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(build_env_filter(level).is_ok(), "level '{}' rejected", level);
        }
    }

    #[test]
    fn env_filter_rejects_garbage() {
        match build_env_filter("focusd=notalevel") {
            Err(LoggingError::FilterError(msg)) => assert!(msg.contains("notalevel")),
            other => panic!("Expected FilterError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn file_layer_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("logs").join("focusd.log");

        let filter = build_env_filter("info").unwrap();
        create_file_layer(&log_path, "text", filter).unwrap();

        assert!(log_path.exists());
    }

    #[test]
    fn minimal_logging_is_reentrant() {
        // A second call must not panic even if a subscriber is already set.
        init_minimal_logging();
        init_minimal_logging();
    }
}
