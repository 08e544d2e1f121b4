use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ChangelogError;

/// Writes `text` followed by the current contents of `path` back to `path`.
///
/// The new content goes to a temporary file in the same directory which then
/// replaces the original, so readers see either the old or the new file.
/// The file must already exist.
///
/// # Errors
///
/// Returns `ChangelogError::Read` if the file cannot be read and
/// `ChangelogError::Write` if the replacement cannot be written or moved into place.
pub fn prepend_to_file(path: &Path, text: &str) -> Result<(), ChangelogError> {
    let read_error = |source| ChangelogError::Read {
        path: path.to_path_buf(),
        source,
    };
    let write_error = |source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let existing = fs::read(path).map_err(read_error)?;
    let permissions = fs::metadata(path).map_err(read_error)?.permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(text.as_bytes()).map_err(write_error)?;
    temp.write_all(&existing).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    fs::set_permissions(temp.path(), permissions).map_err(write_error)?;

    temp.persist(path)
        .map_err(|persist_error| write_error(persist_error.error))?;

    debug!(
        path = %path.display(),
        inserted = text.len(),
        preserved = existing.len(),
        "prepended to changelog"
    );

    Ok(())
}
