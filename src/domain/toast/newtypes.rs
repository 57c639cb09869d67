// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast values,
//! ensuring they are always valid once constructed.

use std::fmt;
use std::time::Duration;

// =============================================================================
// ToastId
// =============================================================================

/// Unique identifier for a toast.
///
/// Identifiers are handed out by the owning store from a monotonically
/// increasing counter and are never reused for the lifetime of that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Severity level of a toast. Part of the deduplication key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but did not fail.
    Warning,
}

impl Severity {
    /// Returns a stable lowercase label, suitable for CSS classes or logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Duration Bounds
// =============================================================================

/// Toast timing constants.
pub mod duration_bounds {
    /// Default countdown length in milliseconds.
    pub const DEFAULT_MS: u64 = 3000;
    /// Fixed delay between logical dismissal and removal, in milliseconds.
    pub const EXIT_DELAY_MS: u64 = 300;
    /// Window after creation during which a toast renders as entering.
    pub const ENTER_WINDOW_MS: u64 = 300;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Countdown length of a toast, guaranteed to be strictly positive.
///
/// Non-positive inputs are never rejected: they fall back to a default
/// instead, see [`ToastDuration::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// Creates a duration from milliseconds, or `None` when `millis <= 0`.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        u64::try_from(millis)
            .ok()
            .filter(|ms| *ms > 0)
            .map(|ms| Self(Duration::from_millis(ms)))
    }

    /// Resolves an optional, possibly invalid request value.
    ///
    /// Missing and non-positive values resolve to `fallback`.
    #[must_use]
    pub fn normalize(millis: Option<i64>, fallback: Self) -> Self {
        millis.and_then(Self::from_millis).unwrap_or(fallback)
    }

    /// Returns the duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        saturating_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(Duration::from_millis(duration_bounds::DEFAULT_MS))
    }
}

/// Whole milliseconds of `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Returns the fixed exit-animation delay.
#[must_use]
pub fn exit_delay() -> Duration {
    Duration::from_millis(duration_bounds::EXIT_DELAY_MS)
}

/// Returns the window after creation during which a toast is "entering".
#[must_use]
pub fn enter_window() -> Duration {
    Duration::from_millis(duration_bounds::ENTER_WINDOW_MS)
}

// =============================================================================
// Tests
// =============================================================================
