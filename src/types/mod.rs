//! Core type definitions for listcopy

mod error;
mod list;
mod outcome;

pub use error::ListCopyError;
pub use list::FileList;
pub use outcome::{CopyOutcome, CopyReport, EntryFailure};
