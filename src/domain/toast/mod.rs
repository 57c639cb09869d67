// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! - [`ToastId`], [`Severity`], [`ToastDuration`]: toast value objects
//! - [`Phase`], [`DisplayHint`]: controller lifecycle states

mod lifecycle;
mod newtypes;

pub use lifecycle::{DisplayHint, Phase};
pub use newtypes::{
    duration_bounds, enter_window, exit_delay, saturating_millis, Severity, ToastDuration,
    ToastId,
};
