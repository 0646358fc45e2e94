//! One-shot current-time fetch.
//!
//! The picker starts anchored at the Unix epoch; the host issues a single
//! asynchronous time request at startup and feeds the result back through
//! [`crate::Intent::SetToday`]. The future is runtime-independent, resolves
//! exactly once and is never retried; if it is never awaited the picker
//! simply stays at the epoch.

use chrono::Utc;

use crate::zone::Instant;

/// Source of the current instant; swap in a fixed clock for tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }
}

/// Resolves once with the clock's current instant.
pub async fn fetch_now<C: Clock>(clock: &C) -> Instant {
    clock.now()
}
