//! List command: show which lines of a source file are valid entries

use crate::reader::read_list;
use crate::types::{FileList, ListCopyError};
use crate::ui::format_entry_line;
use std::path::Path;

/// Read `source` and print its valid entries
pub fn run(source: &Path) -> Result<FileList, ListCopyError> {
    let list = read_list(source)?;
    println!("{}", format_listing(&list));
    Ok(list)
}

/// `Found N valid files:` followed by one numbered line per entry.
pub fn format_listing(list: &FileList) -> String {
    let total = list.len();
    let mut lines = Vec::with_capacity(total + 1);
    lines.push(format!("Found {} valid files:", total));
    lines.extend(
        list.iter()
            .enumerate()
            .map(|(index, entry)| format_entry_line(total, index, entry)),
    );
    lines.join("\n")
}
