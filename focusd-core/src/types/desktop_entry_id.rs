//! Desktop-entry identifier type.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File-name suffix that every freedesktop application entry carries.
pub const DESKTOP_ENTRY_SUFFIX: &str = ".desktop";

/// Represents a normalized identifier for a desktop application.
///
/// The identifier is a non-empty string ending in `.desktop`. Construction
/// through [`DesktopEntryId::normalize`] appends the suffix when it is
/// missing, so `"org.foo.Bar"` and `"org.foo.Bar.desktop"` name the same
/// entry. The check is an exact suffix match, not a substring match, and
/// normalization is idempotent.
///
/// # Examples
///
/// ```
/// # use focusd_core::types::desktop_entry_id::DesktopEntryId;
/// let id = DesktopEntryId::normalize("org.foo.Bar").unwrap();
/// assert_eq!(id.as_str(), "org.foo.Bar.desktop");
///
/// let already = DesktopEntryId::normalize("org.foo.Bar.desktop").unwrap();
/// assert_eq!(id, already);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesktopEntryId(String);

impl DesktopEntryId {
    /// Creates a `DesktopEntryId` from a raw identifier, appending the
    /// `.desktop` suffix when it is missing.
    ///
    /// No validation beyond the non-empty check is performed; whether the
    /// entry actually exists is the application registry's concern.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if `value` is empty.
    pub fn normalize(value: &str) -> Result<Self, CoreError> {
        if value.is_empty() {
            return Err(CoreError::InvalidInput(
                "Desktop entry id cannot be empty.".to_string(),
            ));
        }
        if value.ends_with(DESKTOP_ENTRY_SUFFIX) {
            Ok(DesktopEntryId(value.to_string()))
        } else {
            Ok(DesktopEntryId(format!("{}{}", value, DESKTOP_ENTRY_SUFFIX)))
        }
    }

    /// Returns the normalized identifier, including the `.desktop` suffix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier without the `.desktop` suffix.
    pub fn stem(&self) -> &str {
        self.0
            .strip_suffix(DESKTOP_ENTRY_SUFFIX)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for DesktopEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DesktopEntryId> for String {
    fn from(id: DesktopEntryId) -> Self {
        id.0
    }
}

impl AsRef<str> for DesktopEntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
