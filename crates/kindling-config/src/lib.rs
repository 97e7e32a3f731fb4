//! Bootstrap configuration for the Kindling early-window subsystem.
//!
//! The `kindling-config` crate owns the two launcher-facing settings
//! the early-window subsystem consumes: whether a graphical bootstrap
//! window is wanted at all, and which provider plugin should supply it.
//! The launch policy reads both during provider selection and may write
//! the provider name back when it self-heals a misconfigured value.
//!
//! Configuration is persisted as a small JSON document. A missing file
//! or missing keys resolve to the defaults in [`defaults`], so a fresh
//! installation boots without any configuration step.

pub mod defaults;

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or storing the bootstrap configuration.
///
/// I/O errors are wrapped in `Arc` to satisfy the `result_large_err`
/// Clippy lint.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file '{path}': {source}")]
    Io {
        /// Path that was accessed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration file contained invalid JSON.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialised for storage.
    #[error("failed to serialise config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Settings consumed by the early-window subsystem during bootstrap.
///
/// # Example
///
/// ```
/// use kindling_config::BootConfig;
///
/// let config = BootConfig::default();
/// assert!(config.early_window_control());
/// assert_eq!(config.early_window_provider(), "glfw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    #[serde(default = "defaults::default_early_window_control")]
    early_window_control: bool,
    #[serde(default = "defaults::default_provider_string")]
    early_window_provider: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            early_window_control: defaults::DEFAULT_EARLY_WINDOW_CONTROL,
            early_window_provider: defaults::default_provider_string(),
        }
    }
}

impl BootConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(early_window_control: bool, early_window_provider: impl Into<String>) -> Self {
        Self {
            early_window_control,
            early_window_provider: early_window_provider.into(),
        }
    }

    /// Returns whether the early bootstrap window is enabled.
    #[must_use]
    pub const fn early_window_control(&self) -> bool {
        self.early_window_control
    }

    /// Returns the configured early-window provider name.
    #[must_use]
    pub const fn early_window_provider(&self) -> &str {
        self.early_window_provider.as_str()
    }

    /// Replaces the configured provider name.
    ///
    /// The launch policy calls this after a successful selection so a
    /// misconfigured name converges on the provider actually chosen.
    pub fn set_early_window_provider(&mut self, name: impl Into<String>) {
        self.early_window_provider = name.into();
    }

    /// Loads the configuration from a JSON file.
    ///
    /// A missing file resolves to [`BootConfig::default`], matching the
    /// first-launch experience where no config has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file exists but cannot be
    /// read, or [`ConfigError::Parse`] when it is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            source: Arc::new(err),
        })?;
        serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            source: err,
        })
    }

    /// Stores the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when serialisation fails or
    /// [`ConfigError::Io`] when the file cannot be written.
    pub fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, text).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            source: Arc::new(err),
        })
    }
}

#[cfg(test)]
mod tests;
