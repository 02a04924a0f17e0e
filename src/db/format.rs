/// Line codec for the bookmarks file
///
/// One bookmark per line, `<path>\t[f]` or `<path>\t[d]`. No header, no version.

use crate::db::models::{Bookmark, BookmarkKind};
use crate::error::{Result, ZfmError};

/// Separator we write between the path and the kind tag
pub const SEPARATOR: char = '\t';

/// Encode a single bookmark, without the line terminator
pub fn encode_line(bookmark: &Bookmark) -> String {
    format!("{}{}{}", bookmark.path, SEPARATOR, bookmark.kind.tag())
}

/// Decode a single line. `line_no` is 1-based and only used for errors.
///
/// Splits at the last tab; older files that used a plain space are
/// accepted by falling back to the last space.
pub fn decode_line(line: &str, line_no: usize) -> Result<Bookmark> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let parse_error = || ZfmError::Parse {
        line: line_no,
        content: line.to_string(),
    };

    let (path, tag) = line
        .rsplit_once(SEPARATOR)
        .or_else(|| line.rsplit_once(' '))
        .ok_or_else(parse_error)?;

    let tag = tag.trim();
    if path.is_empty() || tag.is_empty() {
        return Err(parse_error());
    }

    let (kind, known) = BookmarkKind::from_tag(tag);
    if !known {
        tracing::debug!(line = line_no, tag, "unknown kind tag, treating as file");
    }

    Ok(Bookmark::new(path, kind))
}

/// Decode a whole file. Blank lines are skipped.
///
/// Works on raw bytes so a line that is not valid UTF-8 is reported with
/// its line number like any other malformed line.
pub fn decode(contents: &[u8]) -> Result<Vec<Bookmark>> {
    let mut bookmarks = Vec::new();

    for (i, raw) in contents.split(|b| *b == b'\n').enumerate() {
        let line_no = i + 1;
        let line = std::str::from_utf8(raw).map_err(|_| ZfmError::Parse {
            line: line_no,
            content: String::from_utf8_lossy(raw).into_owned(),
        })?;

        if line.trim().is_empty() {
            continue;
        }

        bookmarks.push(decode_line(line, line_no)?);
    }

    Ok(bookmarks)
}

/// Encode a whole list, every line newline-terminated
pub fn encode(bookmarks: &[Bookmark]) -> String {
    bookmarks.iter().fold(String::new(), |mut out, bm| {
        out.push_str(&encode_line(bm));
        out.push('\n');
        out
    })
}
