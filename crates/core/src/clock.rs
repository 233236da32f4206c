//! Time source abstraction.
//!
//! Every delivery calculation asks a [`Clock`] for "now" instead of reading
//! the wall clock itself. Production code passes [`SystemClock`]; tests pass a
//! [`FixedClock`] pinned to a known instant.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock {
    /// The current instant in the local time zone.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Create a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
