//! A clock tests can move by hand.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use attesta_core::Clock;

/// A [`Clock`] whose time only moves when a test says so.
///
/// Grant expiry is a pure comparison against this clock, so advancing it is
/// all a test needs to make grants lapse.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at the given unix-ms instant.
    pub fn at(now: i64) -> Arc<Self> {
        Arc::new(Self {
            now: AtomicI64::new(now),
        })
    }

    /// Create a clock at a fixed, recognizable epoch.
    pub fn default_epoch() -> Arc<Self> {
        Self::at(1_700_000_000_000)
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jump to an absolute instant.
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
