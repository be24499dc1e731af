//! Desktop-entry launcher.

use std::path::Path;
use std::process::Command;

use focusd_core::types::DesktopEntryId;

use crate::error::SystemError;

/// Launches desktop entries by shelling out to the standard freedesktop
/// helpers.
///
/// `gio launch` handles the full desktop-entry activation contract (exec
/// field expansion, startup notification, DBusActivatable entries);
/// `gtk-launch` is the fallback when `gio` is not installed. The child is
/// spawned detached and never waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLauncher;

impl CommandLauncher {
    /// Spawns a new instance of the entry at `entry_path`.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::SpawnError` when neither helper could be
    /// spawned.
    pub fn launch(&self, entry_path: &Path, id: &DesktopEntryId) -> Result<(), SystemError> {
        match Command::new("gio").arg("launch").arg(entry_path).spawn() {
            Ok(child) => {
                tracing::info!(desktop_id = %id, pid = child.id(), "launched via gio");
                Ok(())
            }
            Err(gio_err) => {
                tracing::debug!(
                    "gio launch unavailable ({}), falling back to gtk-launch",
                    gio_err
                );
                match Command::new("gtk-launch").arg(id.stem()).spawn() {
                    Ok(child) => {
                        tracing::info!(desktop_id = %id, pid = child.id(), "launched via gtk-launch");
                        Ok(())
                    }
                    Err(e) => Err(SystemError::SpawnError {
                        command: format!("gtk-launch {}", id.stem()),
                        error: e.to_string(),
                    }),
                }
            }
        }
    }
}
