//! Host collaborator seams for the focus-or-launch service.
//!
//! The desktop environment owns the application registry, the windows, the
//! workspaces, and the clock used for focus-stealing prevention. This module
//! defines the narrow query/command traits through which the service talks to
//! that host. Implementations live in the system layer (or in test doubles);
//! the domain never reaches for a global.

use async_trait::async_trait;
use focusd_core::types::{DesktopEntryId, EventTimestamp};
use std::sync::Arc;

use crate::error::FocusError;

/// Hint passed to the host when launching a new application instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchHint {
    /// No target workspace; the host opens a default/new window wherever its
    /// own placement policy puts it.
    NewWindow,
    /// Open the new window on the workspace with the given index.
    OnWorkspace(u32),
}

/// The host's application inventory.
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// Resolves a normalized identifier to an application.
    ///
    /// `Ok(None)` is a lookup miss, not an error; `Err` is reserved for a
    /// failing registry backend.
    async fn lookup(
        &self,
        id: &DesktopEntryId,
    ) -> Result<Option<Arc<dyn ApplicationHandle>>, FocusError>;
}

/// An application known to the host, running or not.
#[async_trait]
pub trait ApplicationHandle: Send + Sync {
    /// The normalized identifier this handle was resolved from.
    fn id(&self) -> &DesktopEntryId;

    /// The application's open windows, in the order the host keeps them.
    ///
    /// The list is assumed to lead with the most relevant window (host
    /// recency order, unverified); callers select the first entry and do not
    /// re-sort.
    async fn windows(&self) -> Result<Vec<Arc<dyn WindowHandle>>, FocusError>;

    /// Number of open windows.
    async fn window_count(&self) -> Result<usize, FocusError> {
        Ok(self.windows().await?.len())
    }

    /// Asks the host to start a new instance of the application.
    async fn open_new_window(&self, hint: LaunchHint) -> Result<(), FocusError>;
}

/// An on-screen window belonging to an application.
#[async_trait]
pub trait WindowHandle: Send + Sync {
    /// The workspace this window belongs to, if any.
    async fn workspace(&self) -> Result<Option<Arc<dyn WorkspaceHandle>>, FocusError>;

    /// Raises and focuses the window.
    ///
    /// `time` feeds the host's focus-stealing prevention; a stale value may
    /// cause the host to flag the window instead of focusing it.
    async fn activate(&self, time: EventTimestamp) -> Result<(), FocusError>;
}

/// A workspace grouping windows.
#[async_trait]
pub trait WorkspaceHandle: Send + Sync {
    /// Switches to this workspace and focuses the given window as one host
    /// command.
    async fn activate_with_focus(
        &self,
        window: Arc<dyn WindowHandle>,
        time: EventTimestamp,
    ) -> Result<(), FocusError>;
}

/// Source of timestamps for focus-stealing-prevention validation.
pub trait Clock: Send + Sync {
    /// The current host event time.
    fn now(&self) -> EventTimestamp;
}

/// Diagnostic record emitted when a call terminates without a host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The identifier did not resolve to a known application.
    AppNotFound { id: DesktopEntryId },
    /// The caller passed an empty identifier.
    EmptyIdentifier,
}

/// Injectable diagnostic channel.
///
/// The fire-and-forget contract leaves no return channel to the caller, so
/// this sink is the only externally observable failure signal. Production
/// wires it to `tracing`; tests substitute a recording sink and assert on it.
pub trait DiagnosticsSink: Send + Sync {
    /// Records one diagnostic.
    fn record(&self, diagnostic: Diagnostic);
}
