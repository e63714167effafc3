//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the application shell, almost all configuration I/O.
///
/// Feed errors stay typed in `mrm-feed`; they never cross this enum because
/// a failed poll is ordinary state (the ⚠️ badge), not an error path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Reading the config file failed for a reason other than absence.
    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file failed.
    #[error("could not write config file {path}: {source}")]
    ConfigWrite {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serializing the configuration failed.
    #[error("could not serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
