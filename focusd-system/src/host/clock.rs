//! Monotonic event clock.

use std::time::Instant;

use focusd_core::types::EventTimestamp;
use focusd_domain::Clock;

/// Millisecond clock counting from service start.
///
/// Monotonic-enough for focus-stealing validation; the value carries no
/// wall-clock meaning.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> EventTimestamp {
        EventTimestamp::from_millis(self.origin.elapsed().as_millis() as u64)
    }
}
