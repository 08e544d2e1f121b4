use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("no Cargo.toml found traversing from '{start_dir}'")]
    NotFound { start_dir: PathBuf },

    #[error("failed to read manifest at '{path}'")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at '{path}'")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest at '{path}' inherits '{field}' but the workspace does not define it")]
    MissingWorkspaceField { path: PathBuf, field: &'static str },

    #[error("'valid-labels' in '{path}' must contain at least one label")]
    EmptyLabelSet { path: PathBuf },

    #[error(
        "no repository URL found: set 'repository' in '{path}' or add an 'origin' git remote"
    )]
    MissingRepository { path: PathBuf },

    #[error("invalid repository URL")]
    Repository(#[from] prlog_core::CoreError),
}
