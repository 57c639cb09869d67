// SPDX-License-Identifier: MPL-2.0
//! Toast configuration, loaded from and saved to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_lens::config::{self, ToastConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Toasts without an explicit duration now stay up for five seconds
//! config.default_duration_ms = Some(5000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::HistoryCapacity;
use crate::domain::toast::ToastDuration;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastLens";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Countdown applied when a request omits its duration or gives a
    /// non-positive one.
    #[serde(default)]
    pub default_duration_ms: Option<i64>,
    /// Number of lifecycle events kept in the diagnostics journal.
    #[serde(default)]
    pub history_capacity: Option<usize>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_TOAST_DURATION_MS as i64),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl ToastConfig {
    /// Returns the validated default duration.
    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        ToastDuration::normalize(self.default_duration_ms, ToastDuration::default())
    }

    /// Returns the validated history capacity.
    #[must_use]
    pub fn history_capacity(&self) -> HistoryCapacity {
        self.history_capacity
            .map(HistoryCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Invalid TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
