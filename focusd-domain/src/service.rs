//! The focus-or-launch decision service.
//!
//! One business method: resolve a desktop-entry identifier against the host's
//! application inventory and issue exactly one of two commands, focus an
//! existing window or start a new instance. Each invocation is an
//! independent, stateless unit of work; the service holds no cross-call
//! state.

use std::sync::Arc;

use focusd_core::types::DesktopEntryId;

use crate::error::FocusError;
use crate::host::{
    ApplicationRegistry, Clock, Diagnostic, DiagnosticsSink, LaunchHint,
};

/// What a completed focus-or-launch call did.
///
/// `NotFound` and `Rejected` are ordinary completions: the fire-and-forget
/// contract turns them into a diagnostic record rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusOutcome {
    /// The application had no open windows; a new instance was launched.
    Launched { id: DesktopEntryId },
    /// An existing window was focused. `switched_workspace` tells whether the
    /// host was asked to switch workspaces as part of the same command.
    Focused {
        id: DesktopEntryId,
        switched_workspace: bool,
    },
    /// The identifier did not resolve; no host command was issued.
    NotFound { id: DesktopEntryId },
    /// The raw identifier was empty; no lookup was attempted and no host
    /// command was issued.
    Rejected,
}

/// The focus-or-launch service.
///
/// All host access goes through collaborators injected at construction time,
/// so the full branch structure can be exercised with in-memory doubles.
pub struct FocusOrLaunchService {
    registry: Arc<dyn ApplicationRegistry>,
    clock: Arc<dyn Clock>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl FocusOrLaunchService {
    /// Creates a new service over the given host collaborators.
    pub fn new(
        registry: Arc<dyn ApplicationRegistry>,
        clock: Arc<dyn Clock>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            registry,
            clock,
            diagnostics,
        }
    }

    /// Resolves `desktop_id` and issues at most one host command.
    ///
    /// The identifier is normalized (`.desktop` appended when missing) before
    /// lookup. A lookup miss or an empty identifier ends the call with a
    /// diagnostic record and zero side effects. Otherwise: no open windows
    /// means one launch command; one or more windows means one focus command
    /// for the first window in host order, combined with a workspace switch
    /// when the window has a workspace.
    ///
    /// # Errors
    ///
    /// Propagates host collaborator failures. Lookup misses are not errors.
    pub async fn focus_or_launch(&self, desktop_id: &str) -> Result<FocusOutcome, FocusError> {
        let id = match DesktopEntryId::normalize(desktop_id) {
            Ok(id) => id,
            Err(_) => {
                self.diagnostics.record(Diagnostic::EmptyIdentifier);
                return Ok(FocusOutcome::Rejected);
            }
        };

        let app = match self.registry.lookup(&id).await? {
            Some(app) => app,
            None => {
                self.diagnostics
                    .record(Diagnostic::AppNotFound { id: id.clone() });
                return Ok(FocusOutcome::NotFound { id });
            }
        };

        let windows = app.windows().await?;
        match windows.first() {
            None => {
                // Not running: open a fresh default window.
                tracing::debug!(desktop_id = %id, "no open windows, launching new instance");
                app.open_new_window(LaunchHint::NewWindow).await?;
                Ok(FocusOutcome::Launched { id })
            }
            Some(window) => {
                let time = self.clock.now();
                match window.workspace().await? {
                    Some(workspace) => {
                        tracing::debug!(desktop_id = %id, %time, "switching workspace and focusing window");
                        workspace.activate_with_focus(Arc::clone(window), time).await?;
                        Ok(FocusOutcome::Focused {
                            id,
                            switched_workspace: true,
                        })
                    }
                    None => {
                        tracing::debug!(desktop_id = %id, %time, "activating window without workspace");
                        window.activate(time).await?;
                        Ok(FocusOutcome::Focused {
                            id,
                            switched_workspace: false,
                        })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ApplicationHandle, WindowHandle, WorkspaceHandle};
    use async_trait::async_trait;
    use focusd_core::types::EventTimestamp;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum HostCommand {
        Launch(LaunchHint),
        Activate(EventTimestamp),
        SwitchAndFocus(EventTimestamp),
    }

    type CommandLog = Arc<Mutex<Vec<HostCommand>>>;

    struct FakeWorkspace {
        log: CommandLog,
        focused: Mutex<Option<Arc<dyn WindowHandle>>>,
    }

    impl FakeWorkspace {
        fn new(log: CommandLog) -> Arc<Self> {
            Arc::new(Self {
                log,
                focused: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl WorkspaceHandle for FakeWorkspace {
        async fn activate_with_focus(
            &self,
            window: Arc<dyn WindowHandle>,
            time: EventTimestamp,
        ) -> Result<(), FocusError> {
            self.log
                .lock()
                .unwrap()
                .push(HostCommand::SwitchAndFocus(time));
            *self.focused.lock().unwrap() = Some(window);
            Ok(())
        }
    }

    struct FakeWindow {
        workspace: Option<Arc<FakeWorkspace>>,
        log: CommandLog,
        activations: Mutex<usize>,
    }

    impl FakeWindow {
        fn new(workspace: Option<Arc<FakeWorkspace>>, log: CommandLog) -> Arc<Self> {
            Arc::new(Self {
                workspace,
                log,
                activations: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl WindowHandle for FakeWindow {
        async fn workspace(&self) -> Result<Option<Arc<dyn WorkspaceHandle>>, FocusError> {
            Ok(self
                .workspace
                .clone()
                .map(|ws| ws as Arc<dyn WorkspaceHandle>))
        }

        async fn activate(&self, time: EventTimestamp) -> Result<(), FocusError> {
            *self.activations.lock().unwrap() += 1;
            self.log.lock().unwrap().push(HostCommand::Activate(time));
            Ok(())
        }
    }

    struct FakeApp {
        id: DesktopEntryId,
        windows: Vec<Arc<dyn WindowHandle>>,
        log: CommandLog,
        fail_launch: bool,
    }

    #[async_trait]
    impl ApplicationHandle for FakeApp {
        fn id(&self) -> &DesktopEntryId {
            &self.id
        }

        async fn windows(&self) -> Result<Vec<Arc<dyn WindowHandle>>, FocusError> {
            Ok(self.windows.clone())
        }

        async fn open_new_window(&self, hint: LaunchHint) -> Result<(), FocusError> {
            if self.fail_launch {
                return Err(FocusError::Launch {
                    id: self.id.to_string(),
                    reason: "spawn refused".to_string(),
                });
            }
            self.log.lock().unwrap().push(HostCommand::Launch(hint));
            Ok(())
        }
    }

    struct FakeRegistry {
        apps: HashMap<String, Arc<FakeApp>>,
        queried: Mutex<Vec<String>>,
    }

    impl FakeRegistry {
        fn new(apps: Vec<Arc<FakeApp>>) -> Arc<Self> {
            Arc::new(Self {
                apps: apps
                    .into_iter()
                    .map(|app| (app.id.as_str().to_string(), app))
                    .collect(),
                queried: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ApplicationRegistry for FakeRegistry {
        async fn lookup(
            &self,
            id: &DesktopEntryId,
        ) -> Result<Option<Arc<dyn ApplicationHandle>>, FocusError> {
            self.queried.lock().unwrap().push(id.as_str().to_string());
            Ok(self
                .apps
                .get(id.as_str())
                .cloned()
                .map(|app| app as Arc<dyn ApplicationHandle>))
        }
    }

    struct FixedClock(EventTimestamp);

    impl Clock for FixedClock {
        fn now(&self) -> EventTimestamp {
            self.0
        }
    }

    struct RecordingDiagnostics {
        records: Mutex<Vec<Diagnostic>>,
    }

    impl RecordingDiagnostics {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(Vec::new()),
            })
        }
    }

    impl DiagnosticsSink for RecordingDiagnostics {
        fn record(&self, diagnostic: Diagnostic) {
            self.records.lock().unwrap().push(diagnostic);
        }
    }

    const NOW: EventTimestamp = EventTimestamp::from_millis(123_456);

    fn service_with(
        registry: Arc<FakeRegistry>,
        diagnostics: Arc<RecordingDiagnostics>,
    ) -> FocusOrLaunchService {
        FocusOrLaunchService::new(registry, Arc::new(FixedClock(NOW)), diagnostics)
    }

    fn app(id: &str, windows: Vec<Arc<dyn WindowHandle>>, log: CommandLog) -> Arc<FakeApp> {
        Arc::new(FakeApp {
            id: DesktopEntryId::normalize(id).unwrap(),
            windows,
            log,
            fail_launch: false,
        })
    }

    #[tokio::test]
    async fn lookup_miss_issues_no_commands_and_one_diagnostic() {
        let log: CommandLog = CommandLog::default();
        let registry = FakeRegistry::new(vec![]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry.clone(), diagnostics.clone());

        let outcome = service.focus_or_launch("org.missing.App").await.unwrap();

        assert!(matches!(outcome, FocusOutcome::NotFound { .. }));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(
            *diagnostics.records.lock().unwrap(),
            vec![Diagnostic::AppNotFound {
                id: DesktopEntryId::normalize("org.missing.App").unwrap()
            }]
        );
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected_without_lookup() {
        let registry = FakeRegistry::new(vec![]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry.clone(), diagnostics.clone());

        let outcome = service.focus_or_launch("").await.unwrap();

        assert_eq!(outcome, FocusOutcome::Rejected);
        assert!(registry.queried.lock().unwrap().is_empty());
        assert_eq!(
            *diagnostics.records.lock().unwrap(),
            vec![Diagnostic::EmptyIdentifier]
        );
    }

    #[tokio::test]
    async fn app_without_windows_is_launched() {
        let log: CommandLog = CommandLog::default();
        let registry = FakeRegistry::new(vec![app("org.foo.Bar", vec![], log.clone())]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry, diagnostics.clone());

        let outcome = service.focus_or_launch("org.foo.Bar").await.unwrap();

        assert!(matches!(outcome, FocusOutcome::Launched { .. }));
        assert_eq!(
            *log.lock().unwrap(),
            vec![HostCommand::Launch(LaunchHint::NewWindow)]
        );
        assert!(diagnostics.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn identifier_without_suffix_is_normalized_before_lookup() {
        let log: CommandLog = CommandLog::default();
        let registry = FakeRegistry::new(vec![app("org.foo.Bar", vec![], log.clone())]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry.clone(), diagnostics);

        service.focus_or_launch("org.foo.Bar").await.unwrap();

        assert_eq!(
            *registry.queried.lock().unwrap(),
            vec!["org.foo.Bar.desktop".to_string()]
        );
    }

    #[tokio::test]
    async fn identifier_with_suffix_is_left_unchanged() {
        let log: CommandLog = CommandLog::default();
        let registry = FakeRegistry::new(vec![app("org.foo.Bar.desktop", vec![], log.clone())]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry.clone(), diagnostics);

        service.focus_or_launch("org.foo.Bar.desktop").await.unwrap();

        assert_eq!(
            *registry.queried.lock().unwrap(),
            vec!["org.foo.Bar.desktop".to_string()]
        );
    }

    #[tokio::test]
    async fn window_with_workspace_gets_one_switch_and_focus_command() {
        let log: CommandLog = CommandLog::default();
        let workspace = FakeWorkspace::new(log.clone());
        let window = FakeWindow::new(Some(workspace.clone()), log.clone());
        let registry = FakeRegistry::new(vec![app(
            "org.foo.Bar",
            vec![window.clone() as Arc<dyn WindowHandle>],
            log.clone(),
        )]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry, diagnostics.clone());

        let outcome = service.focus_or_launch("org.foo.Bar.desktop").await.unwrap();

        assert!(matches!(
            outcome,
            FocusOutcome::Focused {
                switched_workspace: true,
                ..
            }
        ));
        assert_eq!(*log.lock().unwrap(), vec![HostCommand::SwitchAndFocus(NOW)]);
        // The command referenced the selected window.
        let focused = workspace.focused.lock().unwrap();
        assert!(Arc::ptr_eq(
            focused.as_ref().unwrap(),
            &(window as Arc<dyn WindowHandle>)
        ));
        assert!(diagnostics.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn window_without_workspace_gets_one_plain_activate() {
        let log: CommandLog = CommandLog::default();
        let window = FakeWindow::new(None, log.clone());
        let registry = FakeRegistry::new(vec![app(
            "org.foo.Bar",
            vec![window.clone() as Arc<dyn WindowHandle>],
            log.clone(),
        )]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry, diagnostics);

        let outcome = service.focus_or_launch("org.foo.Bar").await.unwrap();

        assert!(matches!(
            outcome,
            FocusOutcome::Focused {
                switched_workspace: false,
                ..
            }
        ));
        assert_eq!(*log.lock().unwrap(), vec![HostCommand::Activate(NOW)]);
        assert_eq!(*window.activations.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn first_window_in_host_order_is_selected() {
        let log: CommandLog = CommandLog::default();
        let first = FakeWindow::new(None, log.clone());
        let second = FakeWindow::new(None, log.clone());
        let registry = FakeRegistry::new(vec![app(
            "org.foo.Bar",
            vec![
                first.clone() as Arc<dyn WindowHandle>,
                second.clone() as Arc<dyn WindowHandle>,
            ],
            log.clone(),
        )]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry, diagnostics);

        service.focus_or_launch("org.foo.Bar").await.unwrap();

        assert_eq!(*first.activations.lock().unwrap(), 1);
        assert_eq!(*second.activations.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn launch_failure_propagates_to_the_caller() {
        let log: CommandLog = CommandLog::default();
        let failing = Arc::new(FakeApp {
            id: DesktopEntryId::normalize("org.foo.Bar").unwrap(),
            windows: vec![],
            log: log.clone(),
            fail_launch: true,
        });
        let registry = FakeRegistry::new(vec![failing]);
        let diagnostics = RecordingDiagnostics::new();
        let service = service_with(registry, diagnostics);

        let result = service.focus_or_launch("org.foo.Bar").await;

        assert!(matches!(result, Err(FocusError::Launch { .. })));
        assert!(log.lock().unwrap().is_empty());
    }
}
