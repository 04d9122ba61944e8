//! Error types for navshell-core
//!
//! None of these reach the user on the UI path: the expansion store and the
//! shell log them and fall back to safe defaults (collapsed sidebar, groups
//! closed). They surface only to authoring-time checks and native hosts.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for navshell operations
#[derive(Error, Debug)]
pub enum NavError {
    // ===================
    // Storage Errors
    // ===================
    #[error("Persistent storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Failed to read state file: {path}")]
    StateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write state file: {path}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize state: {message}")]
    Serialize {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Tree Errors
    // ===================
    #[error("Invalid navigation tree: {message}")]
    InvalidTree { message: String },

    #[error("Unknown menu group: {id}")]
    UnknownGroup { id: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl NavError {
    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree {
            message: message.into(),
        }
    }

    /// Storage errors are recoverable: the in-memory state stays authoritative
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            NavError::StorageUnavailable { .. }
                | NavError::StateRead { .. }
                | NavError::StateWrite { .. }
                | NavError::Serialize { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_are_classified() {
        assert!(NavError::storage_unavailable("quota exceeded").is_storage());
        assert!(!NavError::invalid_tree("duplicate group").is_storage());
        assert!(!NavError::UnknownGroup { id: "x".into() }.is_storage());
    }

    #[test]
    fn test_error_messages() {
        let err = NavError::storage_unavailable("private mode");
        assert_eq!(
            err.to_string(),
            "Persistent storage unavailable: private mode"
        );
    }
}
