use prlog_core::{LabelSet, PullRequest, RepositoryId};
use semver::Version;

use crate::Result;

pub trait ChangelogRenderer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the release entry cannot be rendered.
    fn render(
        &self,
        version: &Version,
        labels: &LabelSet,
        pull_requests: &[PullRequest],
        repository: &RepositoryId,
    ) -> Result<String>;
}
