// Turns user-supplied paths into bookmarks
//
// Checks that each path can live in the bookmarks file and that it exists.

use crate::core::KindProbe;
use crate::db::Bookmark;
use crate::error::{Result, ZfmError};
use std::path::Path;

pub struct Recorder;

impl Recorder {
    // Validate and resolve the whole batch. Any bad path fails the lot, so a
    // single `add` either records everything or nothing.
    pub fn prepare<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Bookmark>> {
        paths.iter().map(|p| Self::prepare_one(p.as_ref())).collect()
    }

    fn prepare_one(path: &Path) -> Result<Bookmark> {
        let text = Self::validate_path(path)?;
        let kind = KindProbe::detect(path)?;

        Ok(Bookmark::new(text, kind))
    }

    // Check that a path fits the line format: valid UTF-8, not empty,
    // no tabs or line breaks
    fn validate_path(path: &Path) -> Result<&str> {
        let invalid = |reason: &str| ZfmError::InvalidPath {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let text = path.to_str().ok_or_else(|| invalid("not valid UTF-8"))?;

        if text.is_empty() {
            return Err(invalid("empty path"));
        }

        if text.contains(['\t', '\n', '\r']) {
            return Err(invalid("contains a tab or line break"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BookmarkKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_keeps_order_and_kinds() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir_a");
        let file = temp.path().join("file_a.txt");
        fs::create_dir(&dir).unwrap();
        fs::write(&file, "").unwrap();

        let bookmarks = Recorder::prepare(&[&dir, &file, &dir]).unwrap();

        assert_eq!(bookmarks.len(), 3);
        assert_eq!(bookmarks[0].path, dir.to_str().unwrap());
        assert_eq!(bookmarks[0].kind, BookmarkKind::Directory);
        assert_eq!(bookmarks[1].kind, BookmarkKind::File);
        assert_eq!(bookmarks[2], bookmarks[0]);
    }

    #[test]
    fn test_prepare_fails_whole_batch() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir_a");
        fs::create_dir(&dir).unwrap();
        let missing = temp.path().join("missing");

        let result = Recorder::prepare(&[&dir, &missing]);
        match result {
            Err(ZfmError::NotFound(p)) => assert_eq!(p, missing),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_path_kept_as_typed() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dir_a");
        fs::create_dir(&dir).unwrap();

        // Trailing "/." is not normalized away
        let typed = format!("{}/.", dir.display());
        let bookmarks = Recorder::prepare(&[PathBuf::from(&typed)]).unwrap();
        assert_eq!(bookmarks[0].path, typed);
    }

    #[test]
    fn test_rejects_tab_in_path() {
        let temp = TempDir::new().unwrap();
        let weird = temp.path().join("has\ttab");
        fs::create_dir(&weird).unwrap();

        match Recorder::prepare(&[&weird]) {
            Err(ZfmError::InvalidPath { .. }) => {}
            _ => panic!("Expected InvalidPath error"),
        }
    }

    #[test]
    fn test_rejects_empty_path() {
        match Recorder::prepare(&[PathBuf::new()]) {
            Err(ZfmError::InvalidPath { reason, .. }) => assert!(reason.contains("empty")),
            _ => panic!("Expected InvalidPath error"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_path_is_not_reported_missing() {
        let temp = TempDir::new().unwrap();
        let looped = temp.path().join("loop");
        std::os::unix::fs::symlink("loop", &looped).unwrap();

        match Recorder::prepare(&[&looped]) {
            Err(ZfmError::Io(_)) => {}
            _ => panic!("Expected Io error"),
        }
    }
}
