//! Event timestamp type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A millisecond timestamp on a monotonic-enough clock.
///
/// Passed along with focus and activation commands so the host's
/// focus-stealing-prevention mechanism can validate the request as
/// user-initiated. The value only needs to be comparable against the host's
/// notion of "recent"; it carries no wall-clock meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct EventTimestamp(u64);

impl EventTimestamp {
    /// Creates a timestamp from a millisecond value.
    pub const fn from_millis(millis: u64) -> Self {
        EventTimestamp(millis)
    }

    /// Returns the timestamp's millisecond value.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
