use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Version(#[from] prlog_version::VersionError),

    #[error(transparent)]
    Core(#[from] prlog_core::CoreError),

    #[error(transparent)]
    Git(#[from] prlog_git::GitError),

    #[error(transparent)]
    GitHub(#[from] prlog_github::GitHubError),

    #[error(transparent)]
    Project(#[from] prlog_project::ProjectError),

    #[error(transparent)]
    Changelog(#[from] prlog_changelog::ChangelogError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
