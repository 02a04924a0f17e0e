/// Bookmarks file management
///
/// Loads the whole file into memory and replaces it atomically on save.

use crate::db::format;
use crate::db::models::Bookmark;
use crate::error::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handle to the text file backing the store
#[derive(Debug, Clone)]
pub struct BookmarkFile {
    path: PathBuf,
}

impl BookmarkFile {
    /// Create a handle for the bookmarks file at `path`
    ///
    /// Nothing is touched on disk until `load` or `save` is called.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the bookmarks file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every bookmark, in file order
    ///
    /// # Returns
    /// * `Ok(Vec<Bookmark>)` - Empty if the file does not exist yet
    /// * `Err(ZfmError::Parse)` - On the first malformed line
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no bookmarks file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let bookmarks = format::decode(&contents)?;
        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "loaded bookmarks");

        Ok(bookmarks)
    }

    /// Replace the file with `bookmarks`
    ///
    /// Writes a temp file next to the target and renames it over, so a reader
    /// never sees a half-written file.
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // Create parent directory if it doesn't exist
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(format::encode(bookmarks).as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), count = bookmarks.len(), "saved bookmarks");

        Ok(())
    }
}
