//! Configuration errors

use std::path::PathBuf;

/// Errors that can occur while loading menu settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings from {}: {source}", path.display())]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid.
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
