use tracing::debug;

use crate::{Divergence, GitError, Result};

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not on a branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;

        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(GitError::DetachedHead)
    }

    /// # Errors
    ///
    /// Returns an error if the git status operation fails.
    pub fn is_working_tree_clean(&self) -> Result<bool> {
        let statuses = self.inner.statuses(Some(
            git2::StatusOptions::new()
                .include_untracked(true)
                .recurse_untracked_dirs(true),
        ))?;

        Ok(statuses.is_empty())
    }

    /// # Errors
    ///
    /// Returns [`GitError::DirtyWorkingTree`] if there are uncommitted changes.
    pub fn require_clean_working_tree(&self) -> Result<()> {
        if self.is_working_tree_clean()? {
            Ok(())
        } else {
            Err(GitError::DirtyWorkingTree)
        }
    }

    /// Counts commits between the current branch and its upstream tracking branch.
    ///
    /// Returns `None` if the branch has no upstream configured.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not on a branch.
    pub fn upstream_divergence(&self) -> Result<Option<Divergence>> {
        let branch_name = self.current_branch()?;
        let branch = self
            .inner
            .find_branch(&branch_name, git2::BranchType::Local)?;

        let Ok(upstream) = branch.upstream() else {
            return Ok(None);
        };

        let local = branch.get().peel_to_commit()?.id();
        let remote = upstream.get().peel_to_commit()?.id();
        let (ahead, behind) = self.inner.graph_ahead_behind(local, remote)?;

        Ok(Some(Divergence { ahead, behind }))
    }

    /// Checks that a release can be cut from the current state: no uncommitted
    /// changes, on `release_branch` when one is given, and level with upstream.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::DirtyWorkingTree`], [`GitError::WrongBranch`],
    /// [`GitError::NoUpstream`], [`GitError::UnpushedCommits`] or
    /// [`GitError::UnpulledCommits`] for the first check that fails.
    pub fn require_release_ready(&self, release_branch: Option<&str>) -> Result<()> {
        self.require_clean_working_tree()?;

        let branch = self.current_branch()?;
        if let Some(expected) = release_branch {
            if branch != expected {
                return Err(GitError::WrongBranch {
                    expected: expected.to_string(),
                    actual: branch,
                });
            }
        }

        let divergence = self
            .upstream_divergence()?
            .ok_or_else(|| GitError::NoUpstream {
                branch: branch.clone(),
            })?;

        debug!(
            branch = %branch,
            ahead = divergence.ahead,
            behind = divergence.behind,
            "compared branch with upstream"
        );

        if divergence.ahead > 0 {
            return Err(GitError::UnpushedCommits {
                branch,
                count: divergence.ahead,
            });
        }
        if divergence.behind > 0 {
            return Err(GitError::UnpulledCommits {
                branch,
                count: divergence.behind,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_with_parents, setup_test_repo};
    use super::super::Repository;
    use crate::GitError;
    use std::fs;

    fn track_origin(repo: &Repository) -> anyhow::Result<String> {
        let branch_name = repo.current_branch()?;
        repo.inner
            .remote("origin", "https://github.com/owner/repo.git")?;

        let head = repo.inner.head()?.peel_to_commit()?.id();
        repo.inner.reference(
            &format!("refs/remotes/origin/{branch_name}"),
            head,
            true,
            "test upstream",
        )?;

        let mut branch = repo
            .inner
            .find_branch(&branch_name, git2::BranchType::Local)?;
        branch.set_upstream(Some(&format!("origin/{branch_name}")))?;

        Ok(branch_name)
    }

    #[test]
    fn current_branch_on_main() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let branch = repo.current_branch()?;
        assert!(branch == "main" || branch == "master");
        Ok(())
    }

    #[test]
    fn clean_working_tree() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        assert!(repo.is_working_tree_clean()?);
        Ok(())
    }

    #[test]
    fn dirty_working_tree_with_untracked_file() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        fs::write(dir.path().join("new_file.txt"), "content")?;
        assert!(!repo.is_working_tree_clean()?);
        Ok(())
    }

    #[test]
    fn require_clean_fails_on_dirty() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        fs::write(dir.path().join("new_file.txt"), "content")?;

        let result = repo.require_clean_working_tree();
        assert!(matches!(result, Err(GitError::DirtyWorkingTree)));
        Ok(())
    }

    #[test]
    fn no_upstream_yields_none() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        assert!(repo.upstream_divergence()?.is_none());
        Ok(())
    }

    #[test]
    fn in_sync_with_upstream() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        track_origin(&repo)?;

        let divergence = repo.upstream_divergence()?.expect("upstream configured");

        assert!(divergence.is_in_sync());
        repo.require_release_ready(None)?;
        Ok(())
    }

    #[test]
    fn local_commit_is_unpushed() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        track_origin(&repo)?;
        commit_with_parents(&repo, "Local only", &[])?;

        let result = repo.require_release_ready(None);

        assert!(matches!(
            result,
            Err(GitError::UnpushedCommits { count: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn release_ready_requires_upstream() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.require_release_ready(None);

        assert!(matches!(result, Err(GitError::NoUpstream { .. })));
        Ok(())
    }

    #[test]
    fn release_ready_checks_branch() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        track_origin(&repo)?;

        let result = repo.require_release_ready(Some("release"));

        assert!(matches!(
            result,
            Err(GitError::WrongBranch { ref expected, .. }) if expected == "release"
        ));
        Ok(())
    }

    #[test]
    fn release_ready_rejects_dirty_tree_first() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        fs::write(dir.path().join("new_file.txt"), "content")?;

        let result = repo.require_release_ready(Some("release"));

        assert!(matches!(result, Err(GitError::DirtyWorkingTree)));
        Ok(())
    }
}
