use std::path::Path;

use prlog_core::RepositoryId;
use prlog_git::Repository;
use tracing::debug;

use crate::Result;
use crate::traits::WorkingTreeGuard;

pub struct Git2WorkingTreeGuard;

impl Git2WorkingTreeGuard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2WorkingTreeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkingTreeGuard for Git2WorkingTreeGuard {
    fn ensure_clean(
        &self,
        project_root: &Path,
        repository: &RepositoryId,
        release_branch: Option<&str>,
    ) -> Result<()> {
        let repo = Repository::open(project_root)?;
        repo.require_release_ready(release_branch)?;
        debug!(repository = %repository, "local git state is clean");
        Ok(())
    }
}
