/// Persistence module for zfm
///
/// Handles the bookmark data model and the flat text file that backs it.

pub mod connection;
pub mod format;
pub mod models;

pub use connection::BookmarkFile;
pub use models::*;
