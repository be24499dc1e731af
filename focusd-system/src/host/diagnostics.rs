//! Tracing-backed diagnostics sink.

use focusd_domain::{Diagnostic, DiagnosticsSink};

/// Forwards diagnostic records to the tracing pipeline.
///
/// The production wiring of the domain's injectable diagnostic channel; a
/// lookup miss becomes one warn-level log line and nothing else, preserving
/// the silent best-effort contract towards the bus caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::AppNotFound { id } => {
                tracing::warn!(desktop_id = %id, "App not found: {}", id);
            }
            Diagnostic::EmptyIdentifier => {
                tracing::warn!("FocusOrLaunch called with an empty desktop id");
            }
        }
    }
}
