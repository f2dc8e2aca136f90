//! Per-entry copy outcomes and the batch report

use super::ListCopyError;
use std::path::PathBuf;

/// Successful result of copying a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Regular file copied into the destination
    File { bytes: u64 },

    /// Directory tree merged into `<destination>/<stem>`
    Directory { files: u64, bytes: u64 },
}

impl CopyOutcome {
    /// Bytes written for this entry
    pub fn bytes(&self) -> u64 {
        match self {
            CopyOutcome::File { bytes } | CopyOutcome::Directory { bytes, .. } => *bytes,
        }
    }

    /// Human label for the outcome
    pub fn label(&self) -> &'static str {
        match self {
            CopyOutcome::File { .. } => "file",
            CopyOutcome::Directory { .. } => "directory",
        }
    }
}

/// Failure of a single entry; processing continued with the next one
#[derive(Debug)]
pub struct EntryFailure {
    /// 0-based position in the file list
    pub index: usize,
    pub entry: PathBuf,
    pub error: ListCopyError,
}

/// Aggregated result of a copy run
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Number of entries in the input list
    pub total_entries: usize,
    pub files_copied: usize,
    pub directories_copied: usize,
    /// Aggregate bytes written (files and directory contents)
    pub bytes_copied: u64,
    pub failures: Vec<EntryFailure>,
}

impl CopyReport {
    /// Start a report for a list of `total_entries`
    pub fn new(total_entries: usize) -> Self {
        Self {
            total_entries,
            ..Default::default()
        }
    }

    /// Fold a successful entry into the totals
    pub fn record_success(&mut self, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::File { .. } => self.files_copied += 1,
            CopyOutcome::Directory { .. } => self.directories_copied += 1,
        }
        self.bytes_copied += outcome.bytes();
    }

    /// Keep a failed entry
    pub fn record_failure(&mut self, failure: EntryFailure) {
        self.failures.push(failure);
    }

    /// Number of failed entries, the count printed at the end of a run
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of entries that were missing at copy time
    pub fn not_found_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|failure| failure.error.is_not_found())
            .count()
    }

    /// Number of entries copied successfully
    pub fn succeeded(&self) -> usize {
        self.files_copied + self.directories_copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_successes_and_failures() {
        let mut report = CopyReport::new(3);
        report.record_success(&CopyOutcome::File { bytes: 10 });
        report.record_success(&CopyOutcome::Directory { files: 2, bytes: 5 });
        report.record_failure(EntryFailure {
            index: 3,
            entry: PathBuf::from("gone.txt"),
            error: ListCopyError::NotFound {
                path: PathBuf::from("gone.txt"),
            },
        });

        assert_eq!(report.files_copied, 1);
        assert_eq!(report.directories_copied, 1);
        assert_eq!(report.bytes_copied, 15);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.not_found_count(), 1);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(CopyOutcome::File { bytes: 0 }.label(), "file");
        assert_eq!(
            CopyOutcome::Directory { files: 0, bytes: 0 }.label(),
            "directory"
        );
    }
}
