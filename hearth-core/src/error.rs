/// Structured error types for hearth-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// Binary crates (hearth-tui) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hearth-core operations
#[derive(Error, Debug)]
pub enum HearthError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// A project could not be opened by the host loader
    #[error("Failed to open project {path:?}: {reason}")]
    ProjectOpen { path: PathBuf, reason: String },
}

/// Result type alias for hearth-core operations
pub type Result<T> = std::result::Result<T, HearthError>;

impl HearthError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a project-open error
    pub fn project_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ProjectOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
