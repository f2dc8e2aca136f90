//! Plain-English error summary printed after a copy run

use crate::types::{EntryFailure, ListCopyError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) struct ErrorRecord {
    pub(crate) kind: &'static str,
    pub(crate) path: PathBuf,
    pub(crate) message: String,
    pub(crate) suggestion: Option<String>,
}

impl ErrorRecord {
    pub(crate) fn new(failure: &EntryFailure) -> Self {
        let (message, suggestion) = humanize_error(&failure.error);
        Self {
            kind: failure.error.kind_label(),
            path: failure.entry.clone(),
            message,
            suggestion,
        }
    }
}

fn humanize_error(error: &ListCopyError) -> (String, Option<String>) {
    match error {
        ListCopyError::NotFound { .. } => (
            "File or directory was not found at copy time".to_string(),
            Some("Check whether the path was moved or deleted after the list was written.".to_string()),
        ),
        ListCopyError::PermissionDenied { .. } => (
            "Permission denied while accessing file".to_string(),
            Some("Check file permissions or run with a user that has access.".to_string()),
        ),
        ListCopyError::RecursiveCopy { .. } => (
            "Directory would be copied into itself".to_string(),
            Some("Choose a destination outside the listed directory.".to_string()),
        ),
        ListCopyError::EntryName { .. } => (
            "Entry has no name to copy it under".to_string(),
            Some("List the path by its full name instead.".to_string()),
        ),
        ListCopyError::Walk(msg) => (
            format!("Could not walk directory: {}", msg),
            Some("Check for unreadable subdirectories or symlink loops.".to_string()),
        ),
        ListCopyError::Io(io) => match io.kind() {
            ErrorKind::AlreadyExists => (
                "The destination path already exists as a file or directory".to_string(),
                Some("Remove or rename the conflicting path, then retry.".to_string()),
            ),
            ErrorKind::StorageFull => (
                "Not enough disk space to complete operation".to_string(),
                Some("Free disk space on destination and retry.".to_string()),
            ),
            _ => (
                format!("I/O operation failed: {}", io),
                Some("Retry. If this keeps happening, check disk health and permissions.".to_string()),
            ),
        },
        ListCopyError::SourceNotFound { .. }
        | ListCopyError::SourceUnreadable { .. }
        | ListCopyError::InvalidDestination { .. }
        | ListCopyError::Config(_) => (error.to_string(), None),
    }
}

/// Group failures by kind, showing at most three examples per kind.
pub fn format_error_summary(failures: &[EntryFailure]) -> String {
    let records: Vec<ErrorRecord> = failures.iter().map(ErrorRecord::new).collect();
    format_records(&records)
}

fn format_records(records: &[ErrorRecord]) -> String {
    let mut groups: BTreeMap<&'static str, Vec<&ErrorRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.kind).or_default().push(record);
    }

    let mut lines = Vec::new();
    lines.push("Error summary:".to_string());
    for (kind, items) in groups {
        lines.push(format!("  {} ({}):", kind, items.len()));
        for record in items.iter().take(3) {
            lines.push(format!("    - {}", record.message));
            lines.push(format!("      Path: {}", record.path.display()));
            if let Some(suggestion) = &record.suggestion {
                lines.push(format!("      Try: {}", suggestion));
            }
        }
        if items.len() > 3 {
            lines.push(format!("    - ... {} more", items.len() - 3));
        }
    }
    lines.join("\n")
}
