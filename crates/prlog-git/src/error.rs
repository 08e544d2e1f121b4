use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("working tree has uncommitted changes")]
    DirtyWorkingTree,

    #[error("HEAD is detached, not on a branch")]
    DetachedHead,

    #[error("expected to be on branch '{expected}' but HEAD is on '{actual}'")]
    WrongBranch { expected: String, actual: String },

    #[error("branch '{branch}' has no upstream tracking branch")]
    NoUpstream { branch: String },

    #[error("branch '{branch}' has {count} unpushed commit(s)")]
    UnpushedCommits { branch: String, count: usize },

    #[error("branch '{branch}' is {count} commit(s) behind its upstream")]
    UnpulledCommits { branch: String, count: usize },
}
