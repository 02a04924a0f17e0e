/// zfm library
///
/// Bookmark store for files and directories, backed by a flat text file.

pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use crate::core::BookmarkStore;
pub use db::{Bookmark, BookmarkFile, BookmarkKind, KindFilter};
pub use error::{Result, ZfmError};
