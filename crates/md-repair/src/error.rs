//! Error types for md-repair

use std::path::PathBuf;

/// Result type for md-repair operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building repairs
///
/// The repair transforms themselves are total; only construction from
/// custom settings or a configuration file can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is present but unusable
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Configuration file could not be read
    #[error("Failed to read configuration at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
