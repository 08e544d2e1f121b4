use tracing::debug;

use crate::{PullRequestMerge, Result, VersionTag};

use super::Repository;

const MERGE_PREFIX: &str = "Merge pull request #";

impl Repository {
    /// Lists pull-request merge commits reachable from HEAD but not from `since`,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD or the tag target cannot be resolved or the revision walk fails.
    pub fn pull_request_merges(&self, since: Option<&VersionTag>) -> Result<Vec<PullRequestMerge>> {
        let mut walk = self.inner.revwalk()?;
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        walk.push_head()?;

        if let Some(tag) = since {
            walk.hide(git2::Oid::from_str(&tag.tag.target_sha)?)?;
        }

        let mut merges = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;
            if commit.parent_count() < 2 {
                continue;
            }

            let message = String::from_utf8_lossy(commit.message_bytes());
            if let Some(merge) = parse_merge_message(&commit.id().to_string(), &message) {
                merges.push(merge);
            }
        }

        debug!(
            since = since.map(|t| t.tag.name.as_str()),
            count = merges.len(),
            "collected pull request merges"
        );

        Ok(merges)
    }
}

/// Parses a GitHub merge commit message:
///
/// ```text
/// Merge pull request #42 from owner/branch
///
/// Pull request title
/// ```
///
/// The title is the first non-empty body line, or the source branch if the body is empty.
pub(crate) fn parse_merge_message(sha: &str, message: &str) -> Option<PullRequestMerge> {
    let mut lines = message.lines();
    let summary = lines.next()?;
    let rest = summary.strip_prefix(MERGE_PREFIX)?;
    let (id, branch) = rest.split_once(" from ")?;
    let id = id.parse().ok()?;

    let title = lines
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_else(|| branch.trim());

    Some(PullRequestMerge {
        sha: sha.to_string(),
        id,
        title: title.to_string(),
    })
}
