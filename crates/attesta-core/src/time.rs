//! Time source abstraction.
//!
//! Grant expiry is a pure comparison of the current time against a stored
//! deadline, so the only thing the registry needs from the host is "now".
//! Injecting it as a trait lets tests move time without timers.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current time in unix milliseconds.
pub trait Clock: Send + Sync {
    /// The current time (unix ms).
    fn now_millis(&self) -> i64;
}

/// The production clock, backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
        assert!(a > 1_500_000_000_000, "clock should be past 2017");
    }
}
