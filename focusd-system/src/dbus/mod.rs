//! D-Bus integration for focusd.
//!
//! The wire surface is a single method, `FocusOrLaunch(s desktop_id)`, with
//! no output arguments and no declared error replies. [`interface`] holds the
//! exported interface implementation, [`server`] its registration lifecycle.

pub mod interface;
pub mod server;

pub use interface::{FocusOrLaunchInterface, INTERFACE_NAME, OBJECT_PATH, SERVICE_NAME};
pub use server::FocusOrLaunchServer;
