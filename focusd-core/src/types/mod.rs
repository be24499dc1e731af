//! Foundational value types for focusd.

pub mod desktop_entry_id;
pub mod timestamp;

pub use desktop_entry_id::{DesktopEntryId, DESKTOP_ENTRY_SUFFIX};
pub use timestamp::EventTimestamp;
