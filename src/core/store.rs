/// Bookmark store
///
/// The ordered list of bookmarks plus the file it came from. Loaded once per
/// invocation; mutating operations write the file back before returning.

use crate::core::{KindProbe, Recorder};
use crate::db::{Bookmark, BookmarkFile, BookmarkKind, KindFilter};
use crate::error::{Result, ZfmError};
use std::path::{Path, PathBuf};

/// What `fix` changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Bookmarks whose path no longer exists
    pub removed: Vec<Bookmark>,
    /// Bookmarks whose kind changed, with their new kind
    pub retagged: Vec<Bookmark>,
    /// Bookmarks that could not be checked and were kept as they were
    pub unchecked: Vec<Bookmark>,
}

impl FixReport {
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty() && self.retagged.is_empty() && self.unchecked.is_empty()
    }
}

/// Summary for `zfm status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub path: PathBuf,
    pub file_exists: bool,
    pub total: usize,
    pub files: usize,
    pub directories: usize,
}

/// Handles all bookmark operations
pub struct BookmarkStore {
    file: BookmarkFile,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Load the store backed by `file`
    ///
    /// # Returns
    /// * `Ok(BookmarkStore)` - Empty if the file does not exist yet
    /// * `Err(ZfmError::Parse)` - If a line is malformed; nothing is written
    pub fn open(file: BookmarkFile) -> Result<Self> {
        let bookmarks = file.load()?;
        Ok(Self { file, bookmarks })
    }

    /// Load the store at `path`
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(BookmarkFile::new(path))
    }

    /// Add paths to the end of the store
    ///
    /// Every argument is appended, duplicates included. If any path is
    /// missing or unusable, nothing is added and the file is left alone.
    ///
    /// # Returns
    /// * `Ok(Vec<Bookmark>)` - The bookmarks that were appended
    /// * `Err(ZfmError::NotFound)` - First path that does not exist
    pub fn add<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Vec<Bookmark>> {
        let added = Recorder::prepare(paths)?;

        self.bookmarks.extend(added.iter().cloned());
        self.file.save(&self.bookmarks)?;

        for bm in &added {
            tracing::debug!(path = %bm.path, kind = %bm.kind, "bookmark added");
        }

        Ok(added)
    }

    /// Bookmarks matching `filter`, in store order
    pub fn list(&self, filter: KindFilter) -> Vec<&Bookmark> {
        self.bookmarks.iter().filter(|bm| filter.matches(bm)).collect()
    }

    /// First bookmark (in store order) whose path contains `substring`
    ///
    /// Case-sensitive. No ranking: the earliest match wins.
    ///
    /// # Returns
    /// * `Ok(&Bookmark)` - The first match
    /// * `Err(ZfmError::NoMatch)` - If nothing matches
    pub fn query(&self, substring: &str, filter: KindFilter) -> Result<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|bm| filter.matches(bm))
            .find(|bm| bm.path.contains(substring))
            .ok_or_else(|| ZfmError::NoMatch(substring.to_string()))
    }

    /// Re-check every bookmark against the filesystem
    ///
    /// Drops bookmarks whose path is gone and corrects kinds that changed.
    /// A path that cannot be checked (permission denied, symlink loop) is
    /// kept untouched. Survivors keep their order. Always writes the file back.
    pub fn fix(&mut self) -> Result<FixReport> {
        let mut report = FixReport::default();
        let mut kept = Vec::with_capacity(self.bookmarks.len());

        for mut bm in self.bookmarks.drain(..) {
            match KindProbe::inspect(&bm.path) {
                Ok(None) => report.removed.push(bm),
                Ok(Some(kind)) => {
                    if kind != bm.kind {
                        bm.kind = kind;
                        report.retagged.push(bm.clone());
                    }
                    kept.push(bm);
                }
                Err(e) => {
                    tracing::warn!(path = %bm.path, error = %e, "cannot check bookmark, keeping it");
                    report.unchecked.push(bm.clone());
                    kept.push(bm);
                }
            }
        }

        self.bookmarks = kept;
        self.file.save(&self.bookmarks)?;

        for bm in &report.removed {
            tracing::info!(path = %bm.path, "removed stale bookmark");
        }
        for bm in &report.retagged {
            tracing::info!(path = %bm.path, kind = %bm.kind, "corrected bookmark kind");
        }

        Ok(report)
    }

    /// Remove every bookmark. Leaves an empty file behind.
    ///
    /// Works on the file directly, without decoding it, so a corrupt file
    /// can always be cleared.
    pub fn clear(file: &BookmarkFile) -> Result<()> {
        file.save(&[])?;
        tracing::debug!(path = %file.path().display(), "cleared bookmarks");
        Ok(())
    }

    /// Counts for `zfm status`
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            path: self.file.path().to_path_buf(),
            file_exists: self.file.exists(),
            total: self.bookmarks.len(),
            files: self.count(BookmarkKind::File),
            directories: self.count(BookmarkKind::Directory),
        }
    }

    /// Count bookmarks of one kind
    fn count(&self, kind: BookmarkKind) -> usize {
        self.bookmarks.iter().filter(|bm| bm.kind == kind).count()
    }
}
