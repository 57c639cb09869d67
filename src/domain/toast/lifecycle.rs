// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state machine.
//!
//! This module defines the controller phases and the display hint a
//! renderer derives from them.

/// Current phase of a toast's timer controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Countdown is armed.
    #[default]
    Running,
    /// Countdown is frozen; remaining time is banked.
    Paused,
    /// Exit animation is playing; removal is scheduled.
    Exiting,
    /// Terminal. The store entry has been deleted.
    Removed,
}

impl Phase {
    /// Returns true if the countdown is armed.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns true if the countdown is frozen.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the exit animation is in progress.
    #[must_use]
    pub fn is_exiting(self) -> bool {
        matches!(self, Self::Exiting)
    }

    /// Returns true once the toast has been removed.
    #[must_use]
    pub fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }

    /// Returns true while the toast still counts down or waits (running or paused).
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

/// Visual treatment a renderer should apply to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayHint {
    /// Freshly created, the enter animation is playing.
    Entering,
    /// Fully visible.
    #[default]
    Steady,
    /// Collapsing before removal.
    Exiting,
}

impl DisplayHint {
    /// Returns a stable lowercase label, suitable for CSS classes.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DisplayHint::Entering => "entering",
            DisplayHint::Steady => "steady",
            DisplayHint::Exiting => "exiting",
        }
    }
}
