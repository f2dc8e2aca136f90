//! # listcopy - collect listed files into one directory
//!
//! Reads a text file with one path per line, keeps the lines that name an
//! existing file or directory, and copies each of them into a destination
//! directory. Files keep their permissions and modification time;
//! directories are merged into a subdirectory named after them.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod reader;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::{Config, Mode};
pub use executor::copy_all;
pub use reader::read_list;
pub use types::{CopyOutcome, CopyReport, FileList, ListCopyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
