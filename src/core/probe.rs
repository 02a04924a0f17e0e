/// Filesystem inspection for bookmark kinds
///
/// Decides whether a path is a file or a directory by looking at the live
/// filesystem. Symlinks are followed.

use crate::db::BookmarkKind;
use crate::error::{Result, ZfmError};
use std::fs;
use std::io;
use std::path::Path;

/// Handles kind detection
pub struct KindProbe;

impl KindProbe {
    /// Inspect a path
    ///
    /// Only "no such file or directory" counts as missing. Any other failure
    /// (permission denied, symlink loop, I/O error) is returned as an error.
    ///
    /// # Returns
    /// * `Ok(Some(Directory))` - The path is a directory
    /// * `Ok(Some(File))` - The path exists and is anything else
    /// * `Ok(None)` - Nothing there (a dangling symlink counts as nothing)
    /// * `Err(ZfmError::Io)` - The path could not be checked
    pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Option<BookmarkKind>> {
        match fs::metadata(path.as_ref()) {
            Ok(meta) if meta.is_dir() => Ok(Some(BookmarkKind::Directory)),
            Ok(_) => Ok(Some(BookmarkKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Detect the kind of a path that has to exist
    ///
    /// # Returns
    /// * `Ok(BookmarkKind)` - The detected kind
    /// * `Err(ZfmError::NotFound)` - If the path does not exist
    /// * `Err(ZfmError::Io)` - If the path could not be checked
    ///
    /// # Examples
    /// ```no_run
    /// use zfm_lib::core::KindProbe;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let kind = KindProbe::detect("/etc")?;
    /// println!("/etc is a {}", kind);
    /// # Ok(())
    /// # }
    /// ```
    pub fn detect<P: AsRef<Path>>(path: P) -> Result<BookmarkKind> {
        let path = path.as_ref();
        Self::inspect(path)?.ok_or_else(|| ZfmError::NotFound(path.to_path_buf()))
    }
}
