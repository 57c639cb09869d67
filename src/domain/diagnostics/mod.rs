// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`HistoryCapacity`]: Capacity of the lifecycle journal

mod newtypes;

pub use newtypes::{history_capacity_bounds, HistoryCapacity};
