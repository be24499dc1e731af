//! System layer for focusd.
//!
//! Everything that touches D-Bus or the operating system lives here: the
//! exported `com.dotfiles.FocusOrLaunch` interface and its registration
//! lifecycle ([`dbus`]), and the concrete host adapters behind the domain's
//! collaborator traits ([`host`]).

pub mod dbus;
pub mod error;
pub mod host;

pub use dbus::{FocusOrLaunchServer, OBJECT_PATH, SERVICE_NAME};
pub use error::SystemError;
