//! Metadata-preserving atomic file copy

use crate::types::ListCopyError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Copy a file atomically, keeping its permissions and modification time.
///
/// 1. Write to a uniquely named temporary file in `dest`'s directory
/// 2. Flush and sync to disk
/// 3. Copy permissions and mtime from `src`
/// 4. Rename over `dest` (replaces an existing file of the same name)
///
/// The temporary name never collides with existing files, so nothing else in
/// the destination directory is touched. It is removed if any step fails.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(ListCopyError::NotFound)` - `src` vanished
/// * `Err(ListCopyError)` - any other IO failure
///
/// # Example
/// ```no_run
/// use listcopy::executor::copy_file_with_metadata;
/// use std::path::Path;
///
/// let bytes = copy_file_with_metadata(Path::new("notes.txt"), Path::new("out/notes.txt"))?;
/// # Ok::<(), listcopy::ListCopyError>(())
/// ```
pub fn copy_file_with_metadata(src: &Path, dest: &Path) -> Result<u64, ListCopyError> {
    let mut src_file = File::open(src).map_err(|e| ListCopyError::from_io(src, e))?;

    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| ListCopyError::from_io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| ListCopyError::from_io(parent, e))?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file
            .read(&mut buffer)
            .map_err(|e| ListCopyError::from_io(src, e))?;

        if bytes_read == 0 {
            break;
        }

        temp.write_all(&buffer[0..bytes_read])
            .map_err(ListCopyError::Io)?;
        total_bytes += bytes_read as u64;
    }

    temp.as_file().sync_all().map_err(ListCopyError::Io)?;

    let src_metadata = src_file.metadata().map_err(|e| ListCopyError::from_io(src, e))?;
    fs::set_permissions(temp.path(), src_metadata.permissions()).map_err(ListCopyError::Io)?;

    let mtime = src_metadata.modified().map_err(ListCopyError::Io)?;
    filetime::set_file_mtime(temp.path(), filetime::FileTime::from_system_time(mtime))
        .map_err(ListCopyError::Io)?;

    temp.persist(dest)
        .map_err(|e| ListCopyError::from_io(dest, e.error))?;

    Ok(total_bytes)
}
