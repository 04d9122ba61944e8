//! Shell configuration
//!
//! Read from `navshell.toml`. Every field has a default, so an absent or
//! partial file is fine; an unparsable one falls back to defaults.

use crate::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name looked up by hosts
pub const CONFIG_FILE_NAME: &str = "navshell.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Storage key holding `"true"` / `"false"` for the pinned/expanded mode
    pub storage_key: String,

    /// Storage key holding the JSON array of open group ids
    pub open_groups_key: String,

    /// Persist the open-group set across reloads (off: session-local)
    pub persist_open_groups: bool,

    /// Class toggled on the document body while expanded
    pub expanded_class: String,

    /// Viewports narrower than this use the overlay sidebar ("lg")
    pub narrow_breakpoint_px: u32,

    /// Viewports at least this wide always show labels ("2xl")
    pub wide_breakpoint_px: u32,

    /// Close the overlay when the route changes
    pub close_on_navigate: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            storage_key: "sidebar-expanded".to_string(),
            open_groups_key: "sidebar-open-groups".to_string(),
            persist_open_groups: false,
            expanded_class: "sidebar-expanded".to_string(),
            narrow_breakpoint_px: 1024,
            wide_breakpoint_px: 1536,
            close_on_navigate: true,
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| NavError::ConfigParse {
            path: origin.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, returning defaults on any I/O, parse or validation error
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No shell config, using defaults");
                return Self::default();
            }
        };

        match Self::from_toml_str(&content, path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring shell config");
                Self::default()
            }
        }
    }

    /// `self` if it passes [`validate`](Self::validate), otherwise defaults
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid shell config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() || self.open_groups_key.trim().is_empty() {
            return Err(NavError::InvalidConfig {
                message: "storage keys must not be empty".to_string(),
            });
        }
        if self.storage_key == self.open_groups_key {
            return Err(NavError::InvalidConfig {
                message: "storage_key and open_groups_key must differ".to_string(),
            });
        }
        if self.expanded_class.trim().is_empty() {
            return Err(NavError::InvalidConfig {
                message: "expanded_class must not be empty".to_string(),
            });
        }
        if self.wide_breakpoint_px <= self.narrow_breakpoint_px {
            return Err(NavError::InvalidConfig {
                message: format!(
                    "wide_breakpoint_px ({}) must exceed narrow_breakpoint_px ({})",
                    self.wide_breakpoint_px, self.narrow_breakpoint_px
                ),
            });
        }
        Ok(())
    }
}
