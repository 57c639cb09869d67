// SPDX-License-Identifier: MPL-2.0
//! Ordered storage of active toasts with message+severity deduplication.

use super::request::ToastRequest;
use crate::domain::toast::{Severity, ToastDuration, ToastId};

/// An active toast record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    severity: Severity,
    duration: ToastDuration,
    reset_counter: u32,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Number of duplicate requests folded into this toast so far.
    ///
    /// Only meaningful as a change signal for the toast's controller.
    #[must_use]
    pub fn reset_counter(&self) -> u32 {
        self.reset_counter
    }

    fn matches(&self, message: &str, severity: Severity) -> bool {
        self.severity == severity && self.message == message
    }
}

/// What [`ToastStore::add`] did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new toast was appended.
    Created(ToastId),
    /// The request matched an existing toast, whose reset counter was bumped.
    Coalesced { id: ToastId, reset_counter: u32 },
}

impl AddOutcome {
    #[must_use]
    pub fn id(self) -> ToastId {
        match self {
            AddOutcome::Created(id) | AddOutcome::Coalesced { id, .. } => id,
        }
    }
}

/// Owns the active toasts in insertion order.
///
/// At most one toast exists per `(message, severity)` pair.
#[derive(Debug)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration: ToastDuration,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastDuration::default())
    }
}

impl ToastStore {
    /// Creates an empty store. `default_duration` applies to requests
    /// without a valid duration.
    #[must_use]
    pub fn new(default_duration: ToastDuration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration,
        }
    }

    /// Adds a request, or folds it into the existing toast with the same
    /// message and severity.
    ///
    /// A coalesced toast keeps its id, position and original duration.
    pub fn add(&mut self, request: ToastRequest) -> AddOutcome {
        let (message, severity, duration_ms) = request.into_parts();

        if let Some(existing) = self
            .toasts
            .iter_mut()
            .find(|t| t.matches(&message, severity))
        {
            existing.reset_counter += 1;
            return AddOutcome::Coalesced {
                id: existing.id,
                reset_counter: existing.reset_counter,
            };
        }

        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            severity,
            duration: ToastDuration::normalize(duration_ms, self.default_duration),
            reset_counter: 0,
        });
        AddOutcome::Created(id)
    }

    /// Removes a toast by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos))
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Finds the toast for a message and severity, if one is active.
    #[must_use]
    pub fn find(&self, message: &str, severity: Severity) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.matches(message, severity))
    }

    /// Returns the toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
