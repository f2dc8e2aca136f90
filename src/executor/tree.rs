//! Recursive merge copy of a directory tree

use super::copy::copy_file_with_metadata;
use crate::types::ListCopyError;
use std::fs;
use std::path::Path;

/// Totals for one merged tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub files: u64,
    pub bytes: u64,
}

/// Copy everything under `src` into `dest`, merging with whatever is there.
///
/// `dest` may already exist; existing files with the same relative path are
/// replaced and unrelated files are left alone. Hidden files and ignore files
/// are copied like any other file, and symlinks are followed so their
/// contents land in `dest`.
///
/// # Errors
/// * `ListCopyError::RecursiveCopy` - `dest` lies inside `src`
/// * `ListCopyError::Walk` - traversal failed (unreadable dir, symlink loop)
/// * Any error from copying an individual file
pub fn merge_copy_dir(src: &Path, dest: &Path) -> Result<TreeStats, ListCopyError> {
    ensure_not_nested(src, dest)?;

    let mut stats = TreeStats::default();

    let walker = ignore::WalkBuilder::new(src)
        .standard_filters(false)
        .follow_links(true)
        .build();

    for result in walker {
        let entry = result.map_err(|e| ListCopyError::Walk(e.to_string()))?;

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue,
        };

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ListCopyError::Walk(format!("{}: {}", entry.path().display(), e)))?;
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| ListCopyError::from_io(&target, e))?;
        } else if file_type.is_file() {
            stats.bytes += copy_file_with_metadata(entry.path(), &target)?;
            stats.files += 1;
        }
        // Sockets, fifos and devices have no content to copy.
    }

    Ok(stats)
}

fn ensure_not_nested(src: &Path, dest: &Path) -> Result<(), ListCopyError> {
    let src_canonical = fs::canonicalize(src).map_err(|e| ListCopyError::from_io(src, e))?;

    // `dest` itself may not exist yet; its parent always does.
    let dest_canonical = match (dest.parent(), dest.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map_err(|e| ListCopyError::from_io(parent, e))?
            .join(name),
        _ => fs::canonicalize(dest).map_err(|e| ListCopyError::from_io(dest, e))?,
    };

    if dest_canonical.starts_with(&src_canonical) {
        return Err(ListCopyError::RecursiveCopy {
            path: src.to_path_buf(),
            target: dest.to_path_buf(),
        });
    }

    Ok(())
}
