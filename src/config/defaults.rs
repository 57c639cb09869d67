// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Countdown, exit and enter animation durations
//! - **History**: Lifecycle journal capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default countdown before a toast starts exiting (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Fixed delay between logical dismissal and removal (in milliseconds).
///
/// Reserved for the exit animation; not configurable.
pub const EXIT_DELAY_MS: u64 = 300;

/// Window after creation during which a toast renders as entering (in milliseconds).
pub const ENTER_WINDOW_MS: u64 = 300;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of lifecycle events kept for diagnostics.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Minimum lifecycle history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 16;

/// Maximum lifecycle history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(EXIT_DELAY_MS > 0);

    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(MAX_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
};
