/// Error types for zfm
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for zfm operations
#[derive(Error, Debug)]
pub enum ZfmError {
    /// I/O errors (reading or replacing the bookmarks file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the bookmarks file could not be decoded
    #[error("Parse error on line {line}: {content:?}")]
    Parse { line: usize, content: String },

    /// Path to bookmark does not exist on disk
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// Path cannot be stored in the bookmarks file
    #[error("Invalid path {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// Query matched no bookmark
    #[error("No bookmark matches '{0}'")]
    NoMatch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for zfm operations
pub type Result<T> = std::result::Result<T, ZfmError>;

/// Convert ZfmError to a user-friendly error message
impl ZfmError {
    pub fn user_message(&self) -> String {
        match self {
            ZfmError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ZfmError::Parse { line, content } => {
                format!(
                    "Bookmarks file is corrupt at line {}: {:?}. Fix or remove that line.",
                    line, content
                )
            }
            ZfmError::NotFound(path) => {
                format!("'{}' does not exist, nothing was added", path.display())
            }
            ZfmError::InvalidPath { path, reason } => {
                format!("Cannot bookmark {:?}: {}", path, reason)
            }
            ZfmError::NoMatch(query) => {
                format!("No bookmark matches '{}'", query)
            }
            ZfmError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            ZfmError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
        }
    }
}
