//! Console output: numbering, progress, and error summaries

pub mod numbering;
mod progress;
mod summary;

pub use numbering::{format_entry_line, index_width, number_label};
pub use progress::{format_completion, ProgressReporter};
pub use summary::format_error_summary;
