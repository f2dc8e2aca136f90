//! Copy command: read a source file and copy its entries

use crate::executor::{copy_all, CopyEvent};
use crate::reader::read_list;
use crate::types::{CopyReport, ListCopyError};
use crate::ui::ProgressReporter;
use std::path::Path;

/// Copy the valid entries of `source` into `destination`.
///
/// The source file is read first, so a missing source is reported even when
/// the destination is also invalid. Per-entry failures are printed and
/// counted in the returned report; they do not make this function fail.
pub fn run(source: &Path, destination: &Path) -> Result<CopyReport, ListCopyError> {
    let list = read_list(source)?;

    let reporter = ProgressReporter::new();
    let on_event = |event: &CopyEvent<'_>| reporter.handle(event);

    copy_all(&list, destination, Some(&on_event))
}
