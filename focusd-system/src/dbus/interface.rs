//! The exported `com.dotfiles.FocusOrLaunch` D-Bus interface.

use std::sync::Arc;

use focusd_domain::FocusOrLaunchService;
use zbus::dbus_interface;

/// Well-known name the service claims on the session bus.
pub const SERVICE_NAME: &str = "com.dotfiles.FocusOrLaunch";

/// Object path the interface is served at.
pub const OBJECT_PATH: &str = "/com/dotfiles/FocusOrLaunch";

/// Name of the exported interface.
pub const INTERFACE_NAME: &str = "com.dotfiles.FocusOrLaunch";

/// D-Bus-facing wrapper around the domain service.
pub struct FocusOrLaunchInterface {
    service: Arc<FocusOrLaunchService>,
}

impl FocusOrLaunchInterface {
    /// Creates the interface over the given domain service.
    pub fn new(service: Arc<FocusOrLaunchService>) -> Self {
        Self { service }
    }
}

#[dbus_interface(name = "com.dotfiles.FocusOrLaunch")]
impl FocusOrLaunchInterface {
    /// Focuses the application named by `desktop_id`, launching a new
    /// instance when it has no open windows.
    ///
    /// Fire-and-forget: the caller gets an empty reply no matter what
    /// happened. Lookup misses end up as a diagnostic log line, host
    /// failures as an error log line; neither crosses the bus.
    async fn focus_or_launch(&self, desktop_id: String) {
        tracing::debug!(%desktop_id, "FocusOrLaunch received");
        match self.service.focus_or_launch(&desktop_id).await {
            Ok(outcome) => tracing::debug!(?outcome, "FocusOrLaunch completed"),
            Err(e) => tracing::error!("FocusOrLaunch for '{}' failed: {}", desktop_id, e),
        }
    }
}
