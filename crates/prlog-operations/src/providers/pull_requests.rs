use std::path::Path;

use prlog_core::{LabelSet, PullRequest, RepositoryId};
use prlog_git::Repository;
use prlog_github::{GitHubClient, GitHubError, select_label};
use tracing::{debug, info};

use crate::Result;
use crate::traits::PullRequestSource;

/// Fetches the label names attached to a pull request.
pub trait LabelLookup: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the labels cannot be fetched.
    fn labels(
        &self,
        repository: &RepositoryId,
        id: u64,
    ) -> std::result::Result<Vec<String>, GitHubError>;
}

impl LabelLookup for GitHubClient {
    fn labels(
        &self,
        repository: &RepositoryId,
        id: u64,
    ) -> std::result::Result<Vec<String>, GitHubError> {
        self.issue_labels(repository, id)
    }
}

/// Collects pull requests merged since the latest version tag and labels
/// each one through a [`LabelLookup`].
pub struct GitHubPullRequestSource<L: LabelLookup> {
    lookup: L,
}

impl<L: LabelLookup> GitHubPullRequestSource<L> {
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

impl<L: LabelLookup> PullRequestSource for GitHubPullRequestSource<L> {
    fn merged_pull_requests(
        &self,
        project_root: &Path,
        repository: &RepositoryId,
        labels: &LabelSet,
    ) -> Result<Vec<PullRequest>> {
        let repo = Repository::open(project_root)?;
        let since = repo.latest_version_tag()?;
        match &since {
            Some(tag) => info!(tag = %tag.tag.name, "collecting pull requests since tag"),
            None => info!("no version tag found, collecting the whole history"),
        }

        let merges = repo.pull_request_merges(since.as_ref())?;
        let mut pull_requests = Vec::with_capacity(merges.len());
        for merge in merges {
            let attached = self.lookup.labels(repository, merge.id)?;
            let label = select_label(merge.id, &attached, labels)?;
            debug!(id = merge.id, label = %label, "labelled pull request");
            pull_requests.push(PullRequest::new(merge.id, merge.title, label));
        }

        Ok(pull_requests)
    }
}
