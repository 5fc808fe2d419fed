// SPDX-License-Identifier: GPL-3.0-only

//! User configuration for the keyboard surface.
//!
//! Configuration is read from an optional JSON file. Every field may be
//! omitted; missing fields fall back to the values in [`crate::app_settings`].
//!
//! ```json
//! { "radius": 180, "press_flash_ms": 120 }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app_settings;

/// User configuration that shapes rendering and timed effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ring radius in pixels for both key groups.
    pub radius: f64,
    /// Duration of the pressed flash in milliseconds.
    pub press_flash_ms: u64,
    /// Duration a toast stays visible in milliseconds.
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: app_settings::DEFAULT_RADIUS,
            press_flash_ms: app_settings::PRESS_FLASH_MS,
            toast_duration_ms: app_settings::TOAST_DURATION_MS,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.display().to_string(),
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            source,
            path: path.display().to_string(),
        })
    }

    /// Loads configuration from `path` if given, falling back to defaults.
    ///
    /// Failures are logged and never propagated.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Pressed flash duration.
    pub fn press_flash(&self) -> Duration {
        Duration::from_millis(self.press_flash_ms)
    }

    /// Toast display duration.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Longest timed effect, used to drain pending timers on shutdown.
    pub fn longest_effect(&self) -> Duration {
        self.press_flash().max(self.toast_duration())
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        source: std::io::Error,
        path: String,
    },
    /// The file is not valid configuration JSON.
    Json {
        source: serde_json::Error,
        path: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { source, path } => {
                write!(f, "failed to read config {}: {}", path, source)
            }
            ConfigError::Json { source, path } => {
                write!(f, "invalid config {} at line {}: {}", path, source.line(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
