//! Clock port: where write timestamps come from.

use usercrud_domain::time::{self, Timestamp};

/// Source of the current time, read once per write.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
