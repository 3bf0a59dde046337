//! Error types for the CafeBot workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the CafeBot crates.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Invalid user-supplied slot
/// values are deliberately NOT errors: they are recoverable dialog conditions
/// handled by re-prompting, so they never appear here.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CafebotError {
    /// Serialization/deserialization error at the platform envelope boundary
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON"
        message: String,
    },

    /// Configuration error (bad catalog or bot configuration)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CafebotError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for CafebotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CafebotError>`.
pub type Result<T> = std::result::Result<T, CafebotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let err = CafebotError::config("empty catalog");
        assert!(err.is_config());
        assert_eq!(err.to_string(), "Configuration error: empty catalog");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CafebotError::from(json_err);
        assert!(err.is_serialization());
    }
}
