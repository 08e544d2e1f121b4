use std::path::Path;

use crate::Result;
use crate::types::ProjectSettings;

pub trait ProjectProvider: Send + Sync {
    /// Resolves repository identity, label set and changelog location for the
    /// project containing `start_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if no project can be found or its configuration is invalid.
    fn load_settings(&self, start_path: &Path) -> Result<ProjectSettings>;
}
