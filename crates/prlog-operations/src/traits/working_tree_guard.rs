use std::path::Path;

use prlog_core::RepositoryId;

use crate::Result;

pub trait WorkingTreeGuard: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the local repository has uncommitted, unpushed or
    /// unpulled changes, or is not on `release_branch` when one is given.
    fn ensure_clean(
        &self,
        project_root: &Path,
        repository: &RepositoryId,
        release_branch: Option<&str>,
    ) -> Result<()>;
}
