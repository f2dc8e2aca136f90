//! Progress reporting

use super::numbering::format_entry_line;
use super::summary::format_error_summary;
use crate::executor::CopyEvent;
use crate::types::{CopyOutcome, CopyReport};
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::path::Path;

/// Console reporter for copy runs.
///
/// Status lines go to stdout; the progress bar lives on stderr and is hidden
/// when stderr is not a terminal.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} entries | {msg}")
        {
            bar.set_style(style.progress_chars("=>-"));
        }
        Self { bar }
    }

    /// Reporter without a progress bar; status lines are still printed.
    pub fn without_bar() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Dispatch a copy event to the matching handler.
    pub fn handle(&self, event: &CopyEvent<'_>) {
        match event {
            CopyEvent::Started { destination, total } => self.start(destination, *total),
            CopyEvent::EntryCopied {
                index,
                total,
                entry,
                outcome,
            } => self.entry_copied(*index, *total, entry, outcome),
            CopyEvent::EntryFailed {
                index,
                total,
                entry,
                error,
            } => self.entry_failed(*index, *total, entry, &error.to_string()),
            CopyEvent::Complete { report } => self.finish(report),
        }
    }

    /// Mark start of the copy phase.
    pub fn start(&self, destination: &Path, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.println(format!("copying files to {} ...", destination.display()));
    }

    /// Report one copied entry.
    pub fn entry_copied(&self, index: usize, total: usize, entry: &str, outcome: &CopyOutcome) {
        self.println(format_entry_line(total, index, entry));
        self.bar.set_message(format!("{} {}", outcome.label(), entry));
        self.bar.inc(1);
    }

    /// Report one failed entry.
    pub fn entry_failed(&self, index: usize, total: usize, entry: &str, err: &str) {
        self.println(format!(
            "{}: {}",
            format_entry_line(total, index, entry),
            style(err).red()
        ));
        self.bar.inc(1);
    }

    /// Finalize the copy phase and print the error count.
    pub fn finish(&self, report: &CopyReport) {
        self.bar.finish_with_message(format!(
            "{} copied, {} failed | {} total",
            report.succeeded(),
            report.failure_count(),
            HumanBytes(report.bytes_copied)
        ));

        self.println(format_completion(report));
        if !report.failures.is_empty() {
            self.println(format_error_summary(&report.failures));
        }
    }

    fn println(&self, line: String) {
        self.bar.suspend(|| println!("{}", line));
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }

    #[cfg(test)]
    fn message(&self) -> String {
        self.bar.message()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Final line of a copy run.
pub fn format_completion(report: &CopyReport) -> String {
    format!("Operation completed with {} errors.", report.failure_count())
}
