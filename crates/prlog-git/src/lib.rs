mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{Divergence, PullRequestMerge, TagInfo, VersionTag};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or if the status check fails.
pub fn is_working_tree_clean(path: &Path) -> Result<bool> {
    Repository::open(path)?.is_working_tree_clean()
}

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}
