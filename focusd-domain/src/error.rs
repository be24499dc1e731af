//! Error types for the focusd domain layer.

use thiserror::Error;

/// Failures reported by host collaborators while executing a focus-or-launch
/// call.
///
/// A lookup miss is not an error: the registry returns `None` and the call
/// ends with a diagnostic record instead. These variants cover the cases
/// where a host command was attempted and the host refused or failed, which
/// the transport layer logs without surfacing anything to the bus caller.
#[derive(Debug, Error)]
pub enum FocusError {
    /// The application registry itself failed (not a miss).
    #[error("Application registry lookup for '{id}' failed: {reason}")]
    Registry { id: String, reason: String },

    /// The host rejected or failed the launch command.
    #[error("Launch command for '{id}' failed: {reason}")]
    Launch { id: String, reason: String },

    /// The host rejected or failed a plain window activation.
    #[error("Window activation failed: {reason}")]
    Activation { reason: String },

    /// The host rejected or failed a combined workspace switch and focus.
    #[error("Workspace switch with focus failed: {reason}")]
    WorkspaceSwitch { reason: String },
}
