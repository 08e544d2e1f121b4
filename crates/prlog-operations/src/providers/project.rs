use std::path::Path;

use prlog_core::RepositoryId;
use prlog_git::Repository;
use prlog_project::{ProjectError, discover_project, load_config};
use tracing::{debug, info};

use crate::Result;
use crate::traits::ProjectProvider;
use crate::types::ProjectSettings;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn load_settings(&self, start_path: &Path) -> Result<ProjectSettings> {
        let project = discover_project(start_path)?;
        let config = load_config(&project)?;

        let url = match config.repository_url() {
            Some(url) => url.to_string(),
            None => origin_url(&project.root)?.ok_or_else(|| ProjectError::MissingRepository {
                path: project.manifest_path(),
            })?,
        };
        let repository = RepositoryId::from_url(&url).map_err(ProjectError::from)?;

        info!(
            root = %project.root.display(),
            repository = %repository,
            "loaded project settings"
        );

        Ok(ProjectSettings {
            repository,
            labels: config.labels().clone(),
            changelog_path: config.changelog_path().to_path_buf(),
            release_branch: config.release_branch().map(str::to_string),
            root: project.root,
        })
    }
}

fn origin_url(root: &Path) -> Result<Option<String>> {
    let Ok(repo) = Repository::open(root) else {
        debug!(root = %root.display(), "no git repository to read a remote from");
        return Ok(None);
    };
    let url = repo.remote_url()?;
    debug!(url = ?url, "falling back to the origin remote");
    Ok(url)
}
