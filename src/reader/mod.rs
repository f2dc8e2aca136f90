//! Source list reading
//!
//! A source file holds one candidate path per line. Only lines naming an
//! existing file or directory survive; everything else is dropped silently.

use crate::types::{FileList, ListCopyError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read `source` and keep the lines that name existing filesystem entries.
///
/// # Errors
/// * `ListCopyError::SourceNotFound` - `source` does not exist
/// * `ListCopyError::SourceUnreadable` - `source` is a directory, unreadable,
///   or not valid UTF-8 text
///
/// Both are fatal: there is nothing to process without a list.
pub fn read_list(source: &Path) -> Result<FileList, ListCopyError> {
    let content = fs::read_to_string(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ListCopyError::SourceNotFound {
            path: source.to_path_buf(),
            source: e,
        },
        _ => ListCopyError::SourceUnreadable {
            path: source.to_path_buf(),
            source: e,
        },
    })?;

    Ok(parse_list(&content))
}

/// Split `content` into lines and keep non-blank lines that exist on disk.
///
/// Lines are not trimmed, sorted, or deduplicated. `\n`, `\r\n` and a bare
/// `\r` all end a line; the empty piece between `\r` and `\n` is dropped with
/// the other blank lines.
pub fn parse_list(content: &str) -> FileList {
    content
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .filter(|line| Path::new(line).exists())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into()
}
