// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown state machine.
//!
//! A controller banks the remaining countdown instead of a fixed deadline,
//! so pausing and resuming any number of times stays exact. It holds at
//! most one pending timer: every arm goes through [`ToastTimerController::arm`],
//! which cancels the previous handle first.

use super::timer::{TimerHandle, TimerQueue};
use crate::domain::toast::{
    enter_window, exit_delay, saturating_millis, DisplayHint, Phase, ToastDuration, ToastId,
};
use std::time::Duration;

/// What a scheduled timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The countdown ran out.
    Expire,
    /// The exit animation finished; remove the toast.
    Remove,
}

/// Payload stored in the shared [`TimerQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub id: ToastId,
    pub kind: TimerKind,
}

/// Result of delivering a fired timer to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Stale or inapplicable timer, nothing changed.
    Ignored,
    /// Countdown expired; the controller is now exiting.
    Expired,
    /// Exit delay elapsed; the owner must delete the store entry.
    Removed,
}

/// Countdown, pause/resume and exit sequencing for one toast.
#[derive(Debug)]
pub struct ToastTimerController {
    id: ToastId,
    duration: ToastDuration,
    phase: Phase,
    /// Countdown left as of `armed_at` (Running) or as banked (Paused).
    remaining: Duration,
    armed_at: Duration,
    mounted_at: Duration,
    reset_counter: u32,
    pending: Option<TimerHandle>,
}

impl ToastTimerController {
    /// Mounts a controller and arms its countdown for the full duration.
    pub fn start(
        id: ToastId,
        duration: ToastDuration,
        reset_counter: u32,
        timers: &mut TimerQueue<TimerEvent>,
    ) -> Self {
        let now = timers.now();
        let mut controller = Self {
            id,
            duration,
            phase: Phase::Running,
            remaining: duration.as_duration(),
            armed_at: now,
            mounted_at: now,
            reset_counter,
            pending: None,
        };
        controller.arm(timers, duration.as_duration(), TimerKind::Expire);
        controller
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Reset counter value this controller last acted on.
    #[must_use]
    pub fn reset_counter(&self) -> u32 {
        self.reset_counter
    }

    /// Remaining countdown at logical time `now`.
    ///
    /// Zero once exiting.
    #[must_use]
    pub fn remaining_at(&self, now: Duration) -> Duration {
        match self.phase {
            Phase::Running => self
                .remaining
                .saturating_sub(now.saturating_sub(self.armed_at)),
            Phase::Paused => self.remaining,
            Phase::Exiting | Phase::Removed => Duration::ZERO,
        }
    }

    /// Visual treatment at logical time `now`.
    #[must_use]
    pub fn display_hint(&self, now: Duration) -> DisplayHint {
        if matches!(self.phase, Phase::Exiting | Phase::Removed) {
            DisplayHint::Exiting
        } else if now < self.entered_at() {
            DisplayHint::Entering
        } else {
            DisplayHint::Steady
        }
    }

    /// Logical time at which the enter animation is over.
    #[must_use]
    pub fn entered_at(&self) -> Duration {
        self.mounted_at.saturating_add(enter_window())
    }

    /// Restarts the countdown if `reset_counter` differs from the last one seen.
    ///
    /// An exiting toast only records the counter: its pending removal is
    /// not cancellable. Returns true if a reset happened.
    pub fn sync_reset(&mut self, reset_counter: u32, timers: &mut TimerQueue<TimerEvent>) -> bool {
        if reset_counter == self.reset_counter || self.phase.is_removed() {
            return false;
        }
        self.reset_counter = reset_counter;
        if self.phase.is_exiting() {
            tracing::debug!(id = %self.id, "reset while exiting, removal stays scheduled");
            return false;
        }
        self.reset(timers);
        true
    }

    /// Refreshes the countdown to the full duration.
    ///
    /// A paused toast stays paused with the refreshed time banked.
    fn reset(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        self.remaining = self.duration.as_duration();
        if self.phase.is_paused() {
            tracing::debug!(id = %self.id, "reset while paused, countdown banked");
            return;
        }
        self.phase = Phase::Running;
        self.armed_at = timers.now();
        self.arm(timers, self.remaining, TimerKind::Expire);
        tracing::debug!(id = %self.id, remaining_ms = saturating_millis(self.remaining), "countdown reset");
    }

    /// Freezes a running countdown. Returns the banked remaining time.
    pub fn pause(&mut self, timers: &mut TimerQueue<TimerEvent>) -> Option<Duration> {
        if !self.phase.is_running() {
            return None;
        }
        self.remaining = self.remaining_at(timers.now());
        self.disarm(timers);
        self.phase = Phase::Paused;
        Some(self.remaining)
    }

    /// Re-arms a paused countdown for exactly the banked time.
    pub fn resume(&mut self, timers: &mut TimerQueue<TimerEvent>) -> Option<Duration> {
        if !self.phase.is_paused() {
            return None;
        }
        self.phase = Phase::Running;
        self.armed_at = timers.now();
        self.arm(timers, self.remaining, TimerKind::Expire);
        Some(self.remaining)
    }

    /// Starts the exit sequence from a running or paused toast.
    ///
    /// Returns false when already exiting or removed.
    pub fn close(&mut self, timers: &mut TimerQueue<TimerEvent>) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        self.begin_exit(timers);
        true
    }

    /// Delivers a fired timer.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
        kind: TimerKind,
        timers: &mut TimerQueue<TimerEvent>,
    ) -> TimerOutcome {
        if self.pending != Some(handle) {
            tracing::warn!(id = %self.id, ?kind, "stale timer ignored");
            return TimerOutcome::Ignored;
        }
        self.pending = None;

        match (kind, self.phase) {
            (TimerKind::Expire, Phase::Running) => {
                self.begin_exit(timers);
                TimerOutcome::Expired
            }
            (TimerKind::Remove, Phase::Exiting) => {
                self.phase = Phase::Removed;
                TimerOutcome::Removed
            }
            (kind, phase) => {
                tracing::warn!(id = %self.id, ?kind, ?phase, "timer fired in unexpected phase");
                TimerOutcome::Ignored
            }
        }
    }

    /// Cancels whatever is pending. Used when the toast is removed externally.
    pub fn shutdown(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        self.disarm(timers);
        self.phase = Phase::Removed;
    }

    fn begin_exit(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        self.phase = Phase::Exiting;
        self.remaining = Duration::ZERO;
        self.arm(timers, exit_delay(), TimerKind::Remove);
    }

    fn arm(&mut self, timers: &mut TimerQueue<TimerEvent>, delay: Duration, kind: TimerKind) {
        self.disarm(timers);
        let event = TimerEvent { id: self.id, kind };
        self.pending = Some(timers.schedule_in(delay, event));
    }

    fn disarm(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }

    #[cfg(test)]
    fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup(duration_ms: i64) -> (ToastTimerController, TimerQueue<TimerEvent>) {
        let mut timers = TimerQueue::new();
        let duration = ToastDuration::from_millis(duration_ms).unwrap();
        let controller = ToastTimerController::start(ToastId::from_raw(0), duration, 0, &mut timers);
        (controller, timers)
    }

    /// Fires everything due up to `until`, returning the outcomes.
    fn run_until(
        controller: &mut ToastTimerController,
        timers: &mut TimerQueue<TimerEvent>,
        until: Duration,
    ) -> Vec<TimerOutcome> {
        let mut outcomes = Vec::new();
        while let Some((handle, event)) = timers.pop_due(until) {
            outcomes.push(controller.on_timer(handle, event.kind, timers));
        }
        timers.settle(until);
        outcomes
    }

    #[test]
    fn start_arms_full_countdown() {
        let (controller, timers) = setup(3000);
        assert_eq!(controller.phase(), Phase::Running);
        assert_eq!(timers.next_deadline(), Some(ms(3000)));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn expiry_then_removal_after_exit_delay() {
        let (mut controller, mut timers) = setup(3000);

        let outcomes = run_until(&mut controller, &mut timers, ms(3000));
        assert_eq!(outcomes, vec![TimerOutcome::Expired]);
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.display_hint(ms(3000)), DisplayHint::Exiting);

        assert!(run_until(&mut controller, &mut timers, ms(3299)).is_empty());
        let outcomes = run_until(&mut controller, &mut timers, ms(3300));
        assert_eq!(outcomes, vec![TimerOutcome::Removed]);
        assert!(controller.phase().is_removed());
        assert!(timers.is_empty());
    }

    #[test]
    fn pause_banks_remaining_and_cancels_countdown() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(2000));

        assert_eq!(controller.pause(&mut timers), Some(ms(1000)));
        assert!(timers.is_empty());
        assert!(controller.pending().is_none());

        // Repeated pointer-enter is a no-op
        assert_eq!(controller.pause(&mut timers), None);

        timers.settle(ms(12_000));
        assert_eq!(controller.remaining_at(timers.now()), ms(1000));
    }

    #[test]
    fn resume_arms_exactly_the_banked_time() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(2000));
        controller.pause(&mut timers);
        timers.settle(ms(7000));

        assert_eq!(controller.resume(&mut timers), Some(ms(1000)));
        assert_eq!(timers.next_deadline(), Some(ms(8000)));
        assert_eq!(controller.resume(&mut timers), None);
    }

    #[test]
    fn repeated_hover_accumulates_elapsed_time() {
        let (mut controller, mut timers) = setup(3000);

        timers.settle(ms(500));
        assert_eq!(controller.pause(&mut timers), Some(ms(2500)));
        timers.settle(ms(1000));
        controller.resume(&mut timers);
        timers.settle(ms(1500));
        assert_eq!(controller.pause(&mut timers), Some(ms(2000)));
        timers.settle(ms(9000));
        controller.resume(&mut timers);
        timers.settle(ms(9500));
        assert_eq!(controller.pause(&mut timers), Some(ms(1500)));
    }

    #[test]
    fn pause_floors_remaining_at_zero() {
        let (mut controller, mut timers) = setup(1000);
        // Settle past the deadline without dispatching the expiry
        timers.settle(ms(1500));
        assert_eq!(controller.pause(&mut timers), Some(Duration::ZERO));
    }

    #[test]
    fn reset_while_running_restarts_full_countdown() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(2000));

        assert!(controller.sync_reset(1, &mut timers));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(ms(5000)));

        // Same counter again does nothing
        assert!(!controller.sync_reset(1, &mut timers));
    }

    #[test]
    fn reset_while_paused_banks_full_duration_without_resuming() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(2000));
        controller.pause(&mut timers);

        assert!(controller.sync_reset(1, &mut timers));
        assert_eq!(controller.phase(), Phase::Paused);
        assert!(timers.is_empty());
        assert_eq!(controller.remaining_at(timers.now()), ms(3000));

        timers.settle(ms(4000));
        assert_eq!(controller.resume(&mut timers), Some(ms(3000)));
        assert_eq!(timers.next_deadline(), Some(ms(7000)));
    }

    #[test]
    fn reset_while_exiting_keeps_removal_scheduled() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(1000));
        controller.close(&mut timers);
        timers.settle(ms(1100));

        assert!(!controller.sync_reset(1, &mut timers));
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.reset_counter(), 1);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(ms(1300)));

        let outcomes = run_until(&mut controller, &mut timers, ms(1300));
        assert_eq!(outcomes, vec![TimerOutcome::Removed]);
    }

    #[test]
    fn close_is_immediate_and_idempotent() {
        let (mut controller, mut timers) = setup(3000);
        timers.settle(ms(500));

        assert!(controller.close(&mut timers));
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(timers.next_deadline(), Some(ms(800)));
        assert_eq!(timers.len(), 1);

        assert!(!controller.close(&mut timers));
        assert_eq!(timers.next_deadline(), Some(ms(800)));
    }

    #[test]
    fn close_while_paused_starts_exit() {
        let (mut controller, mut timers) = setup(3000);
        controller.pause(&mut timers);
        assert!(controller.close(&mut timers));
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.resume(&mut timers), None);
        assert_eq!(controller.pause(&mut timers), None);
    }

    #[test]
    fn stale_handle_is_ignored() {
        let (mut controller, mut timers) = setup(3000);
        let stale = controller.pending().unwrap();
        timers.settle(ms(1000));
        controller.sync_reset(1, &mut timers);

        assert_eq!(
            controller.on_timer(stale, TimerKind::Expire, &mut timers),
            TimerOutcome::Ignored
        );
        assert_eq!(controller.phase(), Phase::Running);
        assert!(controller.pending().is_some());
    }

    #[test]
    fn display_hint_enters_then_settles() {
        let (controller, _timers) = setup(3000);
        assert_eq!(controller.display_hint(ms(0)), DisplayHint::Entering);
        assert_eq!(controller.display_hint(ms(299)), DisplayHint::Entering);
        assert_eq!(controller.display_hint(ms(300)), DisplayHint::Steady);
    }

    #[test]
    fn shutdown_cancels_pending_timer() {
        let (mut controller, mut timers) = setup(3000);
        controller.shutdown(&mut timers);
        assert!(timers.is_empty());
        assert!(controller.phase().is_removed());
        assert!(!controller.sync_reset(3, &mut timers));
    }
}
