// SPDX-License-Identifier: MPL-2.0
//! Toast requests, the immutable input of [`ToastStore::add`](super::ToastStore::add).

use crate::domain::toast::Severity;
use std::time::Duration;

/// A request to show a toast.
///
/// The duration is kept raw: validation and defaulting happen when the store
/// turns the request into a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    message: String,
    severity: Severity,
    duration_ms: Option<i64>,
}

impl ToastRequest {
    /// Creates a request with the default duration.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Sets the countdown in milliseconds. Non-positive values mean "use the default".
    #[must_use]
    pub fn with_duration_ms(mut self, millis: i64) -> Self {
        self.duration_ms = Some(millis);
        self
    }

    /// Sets the countdown. A zero duration means "use the default".
    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.with_duration_ms(millis)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the raw requested duration, if any.
    #[must_use]
    pub fn duration_ms(&self) -> Option<i64> {
        self.duration_ms
    }

    pub(crate) fn into_parts(self) -> (String, Severity, Option<i64>) {
        (self.message, self.severity, self.duration_ms)
    }
}
