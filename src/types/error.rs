//! Error types for listcopy

use std::path::PathBuf;
use thiserror::Error;

/// Error types for listcopy operations
#[derive(Debug, Error)]
pub enum ListCopyError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source list file does not exist
    #[error("Source file not found: {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Source list file exists but cannot be read as text
    #[error("Cannot read source file {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Destination argument is not an existing directory
    #[error("Invalid destination.")]
    InvalidDestination { path: PathBuf },

    /// Entry vanished between reading the list and copying it
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for specific path
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Entry has no final path component to name the copy after
    #[error("Cannot determine a base name for: {path}")]
    EntryName { path: PathBuf },

    /// Directory would be merged into a subdirectory of itself
    #[error("Cannot copy {path} into itself ({target})")]
    RecursiveCopy { path: PathBuf, target: PathBuf },

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ListCopyError {
    /// Check if this error must terminate the whole program
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ListCopyError::SourceNotFound { .. }
                | ListCopyError::SourceUnreadable { .. }
                | ListCopyError::InvalidDestination { .. }
                | ListCopyError::Config(_)
        )
    }

    /// Check if this error reports a missing entry
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListCopyError::NotFound { .. })
    }

    /// Map an IO error raised while working on `path` to the most specific variant.
    pub fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ListCopyError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => ListCopyError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ListCopyError::Io(error),
        }
    }

    /// Short label used to group errors in summaries
    pub fn kind_label(&self) -> &'static str {
        match self {
            ListCopyError::Io(_) => "I/O error",
            ListCopyError::SourceNotFound { .. } => "Source not found",
            ListCopyError::SourceUnreadable { .. } => "Source unreadable",
            ListCopyError::InvalidDestination { .. } => "Invalid destination",
            ListCopyError::NotFound { .. } => "Not found",
            ListCopyError::PermissionDenied { .. } => "Permission denied",
            ListCopyError::EntryName { .. } => "Unnamed entry",
            ListCopyError::RecursiveCopy { .. } => "Recursive copy",
            ListCopyError::Walk(_) => "Walk error",
            ListCopyError::Config(_) => "Configuration error",
        }
    }
}
