// SPDX-License-Identifier: MPL-2.0
//! Lifecycle journal for diagnosing toast behavior.
//!
//! Every transition a toast goes through is appended to a memory-bounded
//! [`CircularBuffer`] of [`LifecycleEvent`]s, readable through
//! [`ToastCenter::history`](crate::notifications::ToastCenter::history).

mod buffer;
mod events;

pub use buffer::{CircularBuffer, HistoryCapacity};
pub use events::{LifecycleEvent, LifecycleEventKind};
