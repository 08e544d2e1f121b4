use std::path::Path;

use prlog_core::{LabelSet, PullRequest, RepositoryId};

use crate::Result;

pub trait PullRequestSource: Send + Sync {
    /// Lists pull requests merged since the last release, each classified by
    /// exactly one label of `labels`.
    ///
    /// # Errors
    ///
    /// Returns an error if history cannot be read, the remote cannot be queried,
    /// or a pull request does not carry exactly one valid label.
    fn merged_pull_requests(
        &self,
        project_root: &Path,
        repository: &RepositoryId,
        labels: &LabelSet,
    ) -> Result<Vec<PullRequest>>;
}
