// SPDX-License-Identifier: MPL-2.0
//! `toast_lens` drives the lifecycle of toast notifications.
//!
//! It deduplicates identical toasts, runs a pausable countdown per toast and
//! keeps dismissed toasts around for a fixed exit animation before removing
//! them. Rendering is left to the host: it reads [`ToastView`] snapshots and
//! reports pointer and close events back.
//!
//! [`ToastView`]: notifications::ToastView

#![doc(html_root_url = "https://docs.rs/toast_lens/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod service;

pub use domain::toast::{DisplayHint, Phase, Severity, ToastDuration, ToastId};
pub use notifications::{ToastCenter, ToastRequest, ToastView};
