//! Debounce and duplicate suppression for input streams.
//!
//! Both stages are plain state machines driven by explicit instants. The
//! event loop owns the clock and calls [`Debouncer::poll`] when the deadline
//! returned by [`Debouncer::deadline`] is reached.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds the latest value until it has been quiet for `window`.
///
/// At most one evaluation is pending. Scheduling a new value replaces the
/// previous one, so a superseded evaluation can never fire.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedule `value` to settle at `now + window`, cancelling any
    /// pending evaluation.
    ///
    /// Returns `true` if a pending evaluation was superseded.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
        superseded
    }

    /// When the pending evaluation is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the settled value once its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending evaluation without settling it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Passes a value through only if it differs from the last one passed.
#[derive(Debug, Clone)]
pub struct RemoveDuplicates<T> {
    last: Option<T>,
}

impl<T> Default for RemoveDuplicates<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: Clone + PartialEq> RemoveDuplicates<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(value)` if it is new, `None` if it repeats the last emission.
    pub fn filter(&mut self, value: T) -> Option<T> {
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }

}
