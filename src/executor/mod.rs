//! Executor module: copies every list entry into the destination

pub mod copy;
pub mod tree;

use crate::types::{CopyOutcome, CopyReport, EntryFailure, FileList, ListCopyError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub use copy::copy_file_with_metadata;
pub use tree::{merge_copy_dir, TreeStats};

/// Events emitted while copying a list.
///
/// `index` is the 0-based position of the entry in the list.
#[derive(Debug)]
pub enum CopyEvent<'a> {
    /// Destination validated, copying is about to begin.
    Started { destination: &'a Path, total: usize },
    /// Entry copied.
    EntryCopied {
        index: usize,
        total: usize,
        entry: &'a str,
        outcome: CopyOutcome,
    },
    /// Entry failed but the batch continued.
    EntryFailed {
        index: usize,
        total: usize,
        entry: &'a str,
        error: &'a ListCopyError,
    },
    /// Every entry has been processed.
    Complete { report: &'a CopyReport },
}

/// Optional callback used to receive copy events.
///
/// The callback may borrow locals (a reporter, a collector) for `'a`.
pub type CopyCallback<'a> = dyn Fn(&CopyEvent<'_>) + 'a;

/// Copy every entry of `list` into `destination`.
///
/// Entries are processed once each, in list order. A failing entry is
/// recorded in the report and the next entry is attempted; only an invalid
/// destination aborts, and it does so before anything is copied.
///
/// # Errors
/// * `ListCopyError::InvalidDestination` - `destination` is not an existing directory
pub fn copy_all(
    list: &FileList,
    destination: &Path,
    on_event: Option<&CopyCallback<'_>>,
) -> Result<CopyReport, ListCopyError> {
    if !destination.is_dir() {
        return Err(ListCopyError::InvalidDestination {
            path: destination.to_path_buf(),
        });
    }

    let total = list.len();
    let mut report = CopyReport::new(total);
    emit_event(on_event, CopyEvent::Started { destination, total });

    for (index, entry) in list.iter().enumerate() {
        match copy_entry(Path::new(entry), destination) {
            Ok(outcome) => {
                report.record_success(&outcome);
                emit_event(
                    on_event,
                    CopyEvent::EntryCopied {
                        index,
                        total,
                        entry,
                        outcome,
                    },
                );
            }
            Err(error) => {
                emit_event(
                    on_event,
                    CopyEvent::EntryFailed {
                        index,
                        total,
                        entry,
                        error: &error,
                    },
                );
                report.record_failure(EntryFailure {
                    index,
                    entry: PathBuf::from(entry),
                    error,
                });
            }
        }
    }

    emit_event(on_event, CopyEvent::Complete { report: &report });

    Ok(report)
}

/// Copy a single entry into `destination`.
///
/// Regular files keep their base name. Directories are merged into
/// `destination/<stem>`, where the stem is the final path component with its
/// last extension removed.
pub fn copy_entry(entry: &Path, destination: &Path) -> Result<CopyOutcome, ListCopyError> {
    let metadata = fs::metadata(entry).map_err(|e| ListCopyError::from_io(entry, e))?;

    if metadata.is_file() {
        let name = entry_name(entry, Path::file_name)?;
        let bytes = copy_file_with_metadata(entry, &destination.join(name))?;
        Ok(CopyOutcome::File { bytes })
    } else if metadata.is_dir() {
        let stem = entry_name(entry, Path::file_stem)?;
        let stats = merge_copy_dir(entry, &destination.join(stem))?;
        Ok(CopyOutcome::Directory {
            files: stats.files,
            bytes: stats.bytes,
        })
    } else {
        Err(ListCopyError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("{} is neither a file nor a directory", entry.display()),
        )))
    }
}

/// Pick a name component of `entry`, resolving `.`/`..` through the real path.
fn entry_name(
    entry: &Path,
    component: for<'p> fn(&'p Path) -> Option<&'p std::ffi::OsStr>,
) -> Result<OsString, ListCopyError> {
    if let Some(name) = component(entry) {
        return Ok(name.to_os_string());
    }

    let resolved = fs::canonicalize(entry).map_err(|e| ListCopyError::from_io(entry, e))?;
    component(&resolved)
        .map(|name| name.to_os_string())
        .ok_or_else(|| ListCopyError::EntryName {
            path: entry.to_path_buf(),
        })
}

fn emit_event(on_event: Option<&CopyCallback<'_>>, event: CopyEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}
