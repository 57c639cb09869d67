// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Toasts are short-lived notifications that dismiss themselves. This module
//! decides when they appear, how their countdown runs, pauses and resets,
//! when duplicates are folded together, and when they are removed after the
//! exit animation. Rendering is left to the host.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest`, the input of the system
//! - [`store`] - `ToastStore`, ordered toasts with message+severity dedup
//! - [`controller`] - `ToastTimerController`, one countdown state machine per toast
//! - [`timer`] - `TimerQueue`, the logical clock timers are scheduled on
//! - [`center`] - `ToastCenter`, the façade tying the above together
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use toast_lens::notifications::{ToastCenter, ToastRequest};
//!
//! let mut center = ToastCenter::default();
//! center.add_toast(ToastRequest::success("Image saved"));
//!
//! // 3 s countdown + 300 ms exit animation
//! center.advance(Duration::from_millis(3300));
//! assert!(center.is_empty());
//! ```
//!
//! # Timing
//!
//! - Default countdown: 3 s, overridable per request or in the config
//! - Exit delay: fixed 300 ms between dismissal and removal
//! - Hovering pauses the countdown; leaving resumes it with the time left

mod center;
mod controller;
mod request;
mod store;
mod timer;

pub use center::{Message, ToastCenter, ToastView};
pub use controller::{TimerEvent, TimerKind, TimerOutcome, ToastTimerController};
pub use request::ToastRequest;
pub use store::{AddOutcome, Toast, ToastStore};
pub use timer::{TimerHandle, TimerQueue};
