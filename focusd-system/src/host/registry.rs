//! Desktop-entry registry over the XDG data directories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use directories_next::BaseDirs;
use focusd_core::types::DesktopEntryId;
use focusd_domain::{ApplicationHandle, ApplicationRegistry, FocusError, LaunchHint, WindowHandle};

use crate::host::launcher::CommandLauncher;

/// Resolves desktop-entry identifiers against `.desktop` files on disk.
///
/// Searches the XDG data directories (user data dir first, then the system
/// dirs, then any configured extra dirs) for a file named exactly like the
/// normalized identifier. This adapter has no shell-side window inventory,
/// so every resolved application reports zero windows and takes the launch
/// branch; the focus branches need a host integration that can enumerate
/// windows.
pub struct DesktopEntryRegistry {
    search_dirs: Vec<PathBuf>,
    launcher: CommandLauncher,
}

impl DesktopEntryRegistry {
    /// Builds a registry over an explicit list of `applications` directories.
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            launcher: CommandLauncher,
        }
    }

    /// Builds a registry over the standard XDG application directories,
    /// extended with `extra_dirs` from the daemon configuration.
    pub fn with_default_dirs(extra_dirs: &[PathBuf]) -> Self {
        let mut search_dirs = default_application_dirs();
        search_dirs.extend(extra_dirs.iter().cloned());
        tracing::debug!(?search_dirs, "desktop-entry search path assembled");
        Self::new(search_dirs)
    }
}

/// The `applications` subdirectories of the XDG data directories.
fn default_application_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.data_dir().join("applications"));
    }
    let system_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    for dir in system_dirs.split(':').filter(|d| !d.is_empty()) {
        dirs.push(Path::new(dir).join("applications"));
    }
    dirs
}

#[async_trait]
impl ApplicationRegistry for DesktopEntryRegistry {
    async fn lookup(
        &self,
        id: &DesktopEntryId,
    ) -> Result<Option<Arc<dyn ApplicationHandle>>, FocusError> {
        for dir in &self.search_dirs {
            let candidate = dir.join(id.as_str());
            if candidate.is_file() {
                tracing::debug!(desktop_id = %id, path = %candidate.display(), "resolved desktop entry");
                return Ok(Some(Arc::new(DesktopEntryHandle {
                    id: id.clone(),
                    entry_path: candidate,
                    launcher: self.launcher,
                })));
            }
        }
        Ok(None)
    }
}

/// Handle over an installed desktop entry.
struct DesktopEntryHandle {
    id: DesktopEntryId,
    entry_path: PathBuf,
    launcher: CommandLauncher,
}

#[async_trait]
impl ApplicationHandle for DesktopEntryHandle {
    fn id(&self) -> &DesktopEntryId {
        &self.id
    }

    async fn windows(&self) -> Result<Vec<Arc<dyn WindowHandle>>, FocusError> {
        // No window inventory without a shell integration.
        Ok(Vec::new())
    }

    async fn open_new_window(&self, _hint: LaunchHint) -> Result<(), FocusError> {
        self.launcher
            .launch(&self.entry_path, &self.id)
            .map_err(|e| FocusError::Launch {
                id: self.id.to_string(),
                reason: e.to_string(),
            })
    }
}
