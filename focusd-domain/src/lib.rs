//! Domain layer for focusd.
//!
//! This crate holds the focus-or-launch decision logic and the trait seams it
//! depends on. The host desktop environment's application and window APIs are
//! modeled as injected collaborators ([`ApplicationRegistry`], the handle
//! traits, [`Clock`], [`DiagnosticsSink`]); this crate never talks to D-Bus
//! or the operating system itself, which keeps the whole branch structure of
//! [`FocusOrLaunchService::focus_or_launch`] testable with in-memory doubles.

pub mod error;
pub mod host;
pub mod service;

pub use error::FocusError;
pub use host::{
    ApplicationHandle, ApplicationRegistry, Clock, Diagnostic, DiagnosticsSink, LaunchHint,
    WindowHandle, WorkspaceHandle,
};
pub use service::{FocusOrLaunchService, FocusOutcome};
