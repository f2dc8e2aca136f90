//! FileList - ordered Path Entries read from a source file

/// Ordered, immutable sequence of path entries.
///
/// Duplicates are kept and order matches the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<String>,
}

impl FileList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry survived filtering
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in processing order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Borrow the raw entries
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl From<Vec<String>> for FileList {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}
