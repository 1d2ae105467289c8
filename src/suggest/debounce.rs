//! Quiet-period debouncing for high-frequency input streams.
//!
//! The debouncer is a passive deadline holder: callers push values as they
//! arrive and poll it when time advances. It never spawns timers itself, so
//! the same type drives both the async session actor (via `sleep_until` on
//! [`Debouncer::deadline`]) and deterministic unit tests.

use std::time::Duration;
use tokio::time::Instant;

/// Default quiet interval before a query is considered settled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Single-slot debouncer with one pending deadline at most.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Create a debouncer that settles values after `delay` of quiet.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured quiet interval.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new input value and restart the quiet period.
    ///
    /// Any previously pending value is discarded, so a superseded value can
    /// never be emitted.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Emit the pending value if its quiet period has fully elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !ready {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// True while a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
