// SPDX-License-Identifier: MPL-2.0
//! Logical timer queue.
//!
//! Deferred callbacks are stored as data and fired by advancing a logical
//! clock, so countdowns behave identically under test and at runtime.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Timers ordered by deadline, ties broken by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), E>,
    deadlines: HashMap<u64, Duration>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `event` to fire `delay` after the current logical time.
    pub fn schedule_in(&mut self, delay: Duration, event: E) -> TimerHandle {
        let deadline = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((deadline, seq), event);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Cancels a timer. Returns its event if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<E> {
        let deadline = self.deadlines.remove(&handle.0)?;
        self.pending.remove(&(deadline, handle.0))
    }

    #[cfg(test)]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Deadline of a pending timer.
    #[cfg(test)]
    pub fn deadline(&self, handle: TimerHandle) -> Option<Duration> {
        self.deadlines.get(&handle.0).copied()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes the earliest timer due at or before `until` and moves the
    /// clock to its deadline.
    ///
    /// Callers loop on this so that timers scheduled while handling one
    /// event still fire within the same advance when they fall due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let (&(deadline, seq), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        let event = self.pending.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        self.now = self.now.max(deadline);
        Some((TimerHandle(seq), event))
    }

    /// Moves the clock forward to `until`. The clock never goes backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
