use std::path::PathBuf;

use prlog_core::{LabelSet, RepositoryId};

/// Everything the pipeline needs to know about the project, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub repository: RepositoryId,
    pub labels: LabelSet,
    pub changelog_path: PathBuf,
    pub release_branch: Option<String>,
}
