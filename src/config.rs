/// Bookmarks file location
///
/// Resolution order: explicit path, then `ZFM_BOOKMARKS_FILE`, then `~/.zfm.txt`.

use crate::error::{Result, ZfmError};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the bookmarks file location
pub const BOOKMARKS_FILE_ENV: &str = "ZFM_BOOKMARKS_FILE";

/// File name used under the home directory when nothing else is set
pub const DEFAULT_FILE_NAME: &str = ".zfm.txt";

/// Resolve the bookmarks file path
///
/// # Arguments
/// * `explicit` - Path given on the command line, if any
///
/// # Returns
/// * `Ok(PathBuf)` - Where the bookmarks live
/// * `Err(ZfmError::Config)` - If no override is set and there is no home directory
pub fn resolve_bookmarks_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = env::var_os(BOOKMARKS_FILE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    default_bookmarks_file()
}

/// `~/.zfm.txt`
pub fn default_bookmarks_file() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ZfmError::Config("Could not determine home directory".to_string()))?;

    Ok(home.join(DEFAULT_FILE_NAME))
}
