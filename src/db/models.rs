/// Data models for the bookmark store
///
/// A bookmark is a path plus the kind it had when it was added (or last fixed).

use serde::{Deserialize, Serialize};
use std::fmt;

/// File or directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkKind {
    File,
    Directory,
}

const FILE_TAG: &str = "[f]";
const DIR_TAG: &str = "[d]";

impl BookmarkKind {
    /// Tag written after the path, both on disk and in `list` output
    pub fn tag(&self) -> &'static str {
        match self {
            BookmarkKind::File => FILE_TAG,
            BookmarkKind::Directory => DIR_TAG,
        }
    }

    /// Decode a tag. `[d]` is a directory, any other tag is a file.
    ///
    /// The second value is false when the tag was not one we write ourselves.
    pub fn from_tag(tag: &str) -> (Self, bool) {
        match tag {
            DIR_TAG => (BookmarkKind::Directory, true),
            FILE_TAG => (BookmarkKind::File, true),
            _ => (BookmarkKind::File, false),
        }
    }
}

impl fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookmarkKind::File => "file",
            BookmarkKind::Directory => "directory",
        };
        write!(f, "{}", s)
    }
}

/// A bookmarked path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub path: String, // as typed by the user, never canonicalized
    pub kind: BookmarkKind,
}

impl Bookmark {
    pub fn new(path: impl Into<String>, kind: BookmarkKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == BookmarkKind::Directory
    }
}

/// Rendered the way `zfm list` prints it: `<path> [f]`
impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind.tag())
    }
}

/// Which kinds a listing or query should consider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    FilesOnly,
    DirsOnly,
}

impl KindFilter {
    /// Build a filter from the `--files` / `--dirs` flags
    pub fn from_flags(files: bool, dirs: bool) -> Self {
        match (files, dirs) {
            (true, false) => KindFilter::FilesOnly,
            (false, true) => KindFilter::DirsOnly,
            _ => KindFilter::All,
        }
    }

    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::FilesOnly => bookmark.kind == BookmarkKind::File,
            KindFilter::DirsOnly => bookmark.kind == BookmarkKind::Directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(BookmarkKind::File.tag(), "[f]");
        assert_eq!(BookmarkKind::Directory.tag(), "[d]");
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(BookmarkKind::from_tag("[d]"), (BookmarkKind::Directory, true));
        assert_eq!(BookmarkKind::from_tag("[f]"), (BookmarkKind::File, true));
        // Unknown tags fall back to File
        assert_eq!(BookmarkKind::from_tag("[x]"), (BookmarkKind::File, false));
    }

    #[test]
    fn test_bookmark_display() {
        let bm = Bookmark::new("/home/user/src", BookmarkKind::Directory);
        assert_eq!(bm.to_string(), "/home/user/src [d]");

        let bm = Bookmark::new("notes.txt", BookmarkKind::File);
        assert_eq!(bm.to_string(), "notes.txt [f]");
    }

    #[test]
    fn test_filter_from_flags() {
        assert_eq!(KindFilter::from_flags(false, false), KindFilter::All);
        assert_eq!(KindFilter::from_flags(true, false), KindFilter::FilesOnly);
        assert_eq!(KindFilter::from_flags(false, true), KindFilter::DirsOnly);
    }

    #[test]
    fn test_filter_matches() {
        let dir = Bookmark::new("/a", BookmarkKind::Directory);
        let file = Bookmark::new("/a/b.txt", BookmarkKind::File);

        assert!(KindFilter::All.matches(&dir));
        assert!(KindFilter::All.matches(&file));
        assert!(KindFilter::DirsOnly.matches(&dir));
        assert!(!KindFilter::DirsOnly.matches(&file));
        assert!(KindFilter::FilesOnly.matches(&file));
        assert!(!KindFilter::FilesOnly.matches(&dir));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&Bookmark::new("/a", BookmarkKind::Directory)).unwrap();
        assert_eq!(json, r#"{"path":"/a","kind":"directory"}"#);
    }
}
