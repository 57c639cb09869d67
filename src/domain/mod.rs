// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects and state enums with no external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`HistoryCapacity`](diagnostics::HistoryCapacity))
//! - [`toast`]: Toast types ([`ToastId`](toast::ToastId), [`Severity`](toast::Severity),
//!   [`ToastDuration`](toast::ToastDuration), [`Phase`](toast::Phase),
//!   [`DisplayHint`](toast::DisplayHint))

pub mod diagnostics;
pub mod toast;
