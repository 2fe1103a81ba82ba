//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// Language code is not bundled
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// Timezone is not on the selectable list
    #[error("Unsupported timezone: {0}")]
    UnknownTimezone(String),

    /// Theme name is not bundled
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Log level cannot be parsed
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Request timeout must be at least one second
    #[error("Request timeout must be at least one second")]
    ZeroRequestTimeout,
}
