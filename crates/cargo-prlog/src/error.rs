use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to set up the GitHub client")]
    GitHub(#[from] prlog_github::GitHubError),

    #[error("failed to update the changelog")]
    Operation(#[from] prlog_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
