// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events recorded by the toast center.

use crate::domain::toast::{Severity, ToastId};
use std::fmt;
use std::time::Duration;

/// A single lifecycle transition, stamped with the logical time it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    /// Logical time since the center was created.
    pub at: Duration,
    /// Toast the transition belongs to.
    pub id: ToastId,
    pub kind: LifecycleEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEventKind {
    /// A new toast entered the store.
    Created { severity: Severity },
    /// A duplicate request was folded into an existing toast.
    Coalesced { reset_counter: u32 },
    /// Countdown frozen with `remaining` banked.
    Paused { remaining: Duration },
    /// Countdown re-armed for `remaining`.
    Resumed { remaining: Duration },
    /// Countdown ran out.
    Expired,
    /// Closed explicitly.
    Closed,
    /// Store entry deleted.
    Removed,
}

impl fmt::Display for LifecycleEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { severity } => write!(f, "created ({severity})"),
            Self::Coalesced { reset_counter } => write!(f, "coalesced (reset #{reset_counter})"),
            Self::Paused { remaining } => write!(f, "paused ({} ms left)", remaining.as_millis()),
            Self::Resumed { remaining } => write!(f, "resumed ({} ms left)", remaining.as_millis()),
            Self::Expired => f.write_str("expired"),
            Self::Closed => f.write_str("closed"),
            Self::Removed => f.write_str("removed"),
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>6} ms] {} {}", self.at.as_millis(), self.id, self.kind)
    }
}
