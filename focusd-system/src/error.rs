//! Error types for the focusd system layer.

use thiserror::Error;

/// Failures in the D-Bus surface and the host adapters.
#[derive(Debug, Error)]
pub enum SystemError {
    /// Connecting to the session bus failed.
    #[error("D-Bus connection failed: {0}")]
    ConnectionFailed(#[source] zbus::Error),

    /// Requesting the well-known service name failed.
    #[error("Failed to request D-Bus service name '{name}': {source}")]
    NameRequestFailed { name: String, source: zbus::Error },

    /// Releasing the well-known service name failed.
    #[error("Failed to release D-Bus service name '{name}': {source}")]
    NameReleaseFailed { name: String, source: zbus::Error },

    /// Exporting the interface on the object server failed.
    #[error("Failed to serve D-Bus object at path '{path}': {source}")]
    ServeAtFailed { path: String, source: zbus::Error },

    /// Removing the interface from the object server failed.
    #[error("Failed to remove D-Bus object at path '{path}': {source}")]
    RemoveFailed { path: String, source: zbus::Error },

    /// Spawning a launcher helper process failed.
    #[error("Failed to spawn launcher command '{command}': {error}")]
    SpawnError { command: String, error: String },
}
