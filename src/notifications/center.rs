// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastCenter` owns the [`ToastStore`], one [`ToastTimerController`]
//! per active toast and the shared logical [`TimerQueue`]. Every external
//! event goes through it, one at a time.

use super::controller::{TimerEvent, TimerOutcome, ToastTimerController};
use super::request::ToastRequest;
use super::store::{AddOutcome, ToastStore};
use super::timer::{TimerHandle, TimerQueue};
use crate::config::ToastConfig;
use crate::diagnostics::{CircularBuffer, HistoryCapacity, LifecycleEvent, LifecycleEventKind};
use crate::domain::toast::{
    saturating_millis, DisplayHint, Phase, Severity, ToastDuration, ToastId,
};
use std::collections::HashMap;
use std::time::Duration;

/// Events a view layer emits for a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer entered the toast: pause its countdown.
    PointerEntered(ToastId),
    /// Pointer left the toast: resume its countdown.
    PointerLeft(ToastId),
    /// Close button pressed: start the exit sequence.
    Close(ToastId),
    /// Drop the toast right away, skipping the exit animation.
    Remove(ToastId),
}

/// Render snapshot of one active toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub hint: DisplayHint,
}

/// Owns the active toasts and drives their lifecycles.
#[derive(Debug)]
pub struct ToastCenter {
    store: ToastStore,
    controllers: HashMap<ToastId, ToastTimerController>,
    timers: TimerQueue<TimerEvent>,
    history: CircularBuffer<LifecycleEvent>,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(ToastDuration::default(), HistoryCapacity::default())
    }
}

impl ToastCenter {
    #[must_use]
    pub fn new(default_duration: ToastDuration, history_capacity: HistoryCapacity) -> Self {
        Self {
            store: ToastStore::new(default_duration),
            controllers: HashMap::new(),
            timers: TimerQueue::new(),
            history: CircularBuffer::new(history_capacity),
        }
    }

    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(config.default_duration(), config.history_capacity())
    }

    /// Shows a toast, or restarts the countdown of an identical one.
    pub fn add_toast(&mut self, request: ToastRequest) {
        match self.store.add(request) {
            AddOutcome::Created(id) => {
                let Some(toast) = self.store.get(id) else {
                    return;
                };
                let (duration, severity) = (toast.duration(), toast.severity());
                let controller =
                    ToastTimerController::start(id, duration, toast.reset_counter(), &mut self.timers);
                self.controllers.insert(id, controller);
                tracing::debug!(%id, %severity, duration_ms = duration.as_millis(), "toast created");
                self.record(id, LifecycleEventKind::Created { severity });
            }
            AddOutcome::Coalesced { id, reset_counter } => {
                if let Some(controller) = self.controllers.get_mut(&id) {
                    controller.sync_reset(reset_counter, &mut self.timers);
                }
                tracing::debug!(%id, reset_counter, "duplicate toast coalesced");
                self.record(id, LifecycleEventKind::Coalesced { reset_counter });
            }
        }
    }

    /// Removes a toast immediately. Unknown ids are ignored.
    pub fn remove_toast(&mut self, id: ToastId) {
        if let Some(mut controller) = self.controllers.remove(&id) {
            controller.shutdown(&mut self.timers);
        }
        if self.store.remove(id).is_some() {
            tracing::debug!(%id, "toast removed");
            self.record(id, LifecycleEventKind::Removed);
        }
    }

    /// Pauses the countdown of a running toast.
    pub fn pointer_entered(&mut self, id: ToastId) {
        let Some(controller) = self.controllers.get_mut(&id) else {
            return;
        };
        if let Some(remaining) = controller.pause(&mut self.timers) {
            tracing::debug!(%id, remaining_ms = saturating_millis(remaining), "countdown paused");
            self.record(id, LifecycleEventKind::Paused { remaining });
        }
    }

    /// Resumes the countdown of a paused toast.
    pub fn pointer_left(&mut self, id: ToastId) {
        let Some(controller) = self.controllers.get_mut(&id) else {
            return;
        };
        if let Some(remaining) = controller.resume(&mut self.timers) {
            tracing::debug!(%id, remaining_ms = saturating_millis(remaining), "countdown resumed");
            self.record(id, LifecycleEventKind::Resumed { remaining });
        }
    }

    /// Starts the exit sequence; the toast is removed after the exit delay.
    pub fn close(&mut self, id: ToastId) {
        let Some(controller) = self.controllers.get_mut(&id) else {
            return;
        };
        if controller.close(&mut self.timers) {
            tracing::debug!(%id, "toast closed");
            self.record(id, LifecycleEventKind::Closed);
        }
    }

    /// Closes every toast that is not already exiting.
    pub fn dismiss_all(&mut self) {
        let ids: Vec<ToastId> = self.store.iter().map(super::store::Toast::id).collect();
        for id in ids {
            self.close(id);
        }
    }

    /// Handles a view-layer message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::PointerEntered(id) => self.pointer_entered(id),
            Message::PointerLeft(id) => self.pointer_left(id),
            Message::Close(id) => self.close(id),
            Message::Remove(id) => self.remove_toast(id),
        }
    }

    /// Advances logical time by `by`, firing every timer that falls due.
    pub fn advance(&mut self, by: Duration) {
        let target = self.timers.now().saturating_add(by);
        self.advance_to(target);
    }

    /// Advances logical time to `at`. Earlier instants are ignored.
    pub fn advance_to(&mut self, at: Duration) {
        while let Some((handle, event)) = self.timers.pop_due(at) {
            self.dispatch(handle, event);
        }
        self.timers.settle(at);
    }

    fn dispatch(&mut self, handle: TimerHandle, event: TimerEvent) {
        let id = event.id;
        tracing::trace!(%id, kind = ?event.kind, at_ms = saturating_millis(self.timers.now()), "timer fired");
        let Some(controller) = self.controllers.get_mut(&id) else {
            return;
        };
        match controller.on_timer(handle, event.kind, &mut self.timers) {
            TimerOutcome::Ignored => {}
            TimerOutcome::Expired => {
                tracing::debug!(%id, "countdown expired");
                self.record(id, LifecycleEventKind::Expired);
            }
            TimerOutcome::Removed => {
                self.controllers.remove(&id);
                if self.store.remove(id).is_some() {
                    tracing::debug!(%id, "toast removed after exit delay");
                    self.record(id, LifecycleEventKind::Removed);
                }
            }
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Earliest logical time at which something changes on its own: a timer
    /// fires or an entering toast settles.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        let now = self.timers.now();
        let settle = self
            .controllers
            .values()
            .map(ToastTimerController::entered_at)
            .filter(|at| *at > now)
            .min();
        match (self.timers.next_deadline(), settle) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Active toasts in insertion order, ready for rendering.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastView> {
        let now = self.timers.now();
        self.store
            .iter()
            .map(|toast| ToastView {
                id: toast.id(),
                message: toast.message().to_owned(),
                severity: toast.severity(),
                hint: self
                    .controllers
                    .get(&toast.id())
                    .map_or(DisplayHint::Steady, |c| c.display_hint(now)),
            })
            .collect()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    /// Finds the active toast for a message and severity.
    #[must_use]
    pub fn find(&self, message: &str, severity: Severity) -> Option<ToastId> {
        self.store.find(message, severity).map(super::store::Toast::id)
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.controllers.get(&id).map(ToastTimerController::phase)
    }

    /// Remaining countdown of a toast at the current logical time.
    #[must_use]
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        let now = self.timers.now();
        self.controllers.get(&id).map(|c| c.remaining_at(now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of scheduled timers across all toasts.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Lifecycle journal, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &LifecycleEvent> {
        self.history.iter()
    }

    fn record(&mut self, id: ToastId, kind: LifecycleEventKind) {
        self.history.push(LifecycleEvent {
            at: self.timers.now(),
            id,
            kind,
        });
    }
}
