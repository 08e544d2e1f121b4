use std::path::Path;

use crate::Result;

pub trait ChangelogPrepender: Send + Sync {
    /// Inserts `text` at the very start of the existing file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or rewritten.
    fn prepend(&self, path: &Path, text: &str) -> Result<()>;
}
