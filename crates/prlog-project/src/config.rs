use std::path::{Path, PathBuf};

use prlog_core::LabelSet;

use crate::error::ProjectError;
use crate::manifest::{CargoManifest, PrlogMetadata, RepositoryField, read_manifest};
use crate::project::CargoProject;

/// Settings read from the project's root manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrlogConfig {
    repository_url: Option<String>,
    changelog_path: PathBuf,
    release_branch: Option<String>,
    labels: LabelSet,
}

impl PrlogConfig {
    /// Defaults for a project rooted at `root`: `CHANGELOG.md`, the default label set,
    /// no repository URL and no release branch.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            repository_url: None,
            changelog_path: root.join(crate::DEFAULT_CHANGELOG_FILE),
            release_branch: None,
            labels: LabelSet::default(),
        }
    }

    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    #[must_use]
    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    #[must_use]
    pub fn release_branch(&self) -> Option<&str> {
        self.release_branch.as_deref()
    }

    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    #[must_use]
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_release_branch(mut self, branch: impl Into<String>) -> Self {
        self.release_branch = Some(branch.into());
        self
    }
}

/// Reads the prlog settings of `project`.
///
/// `[package.metadata.prlog]` takes precedence over `[workspace.metadata.prlog]`
/// field by field.
///
/// # Errors
///
/// Returns `ProjectError` if the manifest cannot be read, an inherited
/// `repository` is not defined by the workspace, or `valid-labels` is empty.
pub fn load_config(project: &CargoProject) -> Result<PrlogConfig, ProjectError> {
    let manifest_path = project.manifest_path();
    let manifest = read_manifest(&manifest_path)?;

    let repository_url = resolve_repository(&manifest, &manifest_path)?;
    let metadata = merged_metadata(&manifest);

    let labels = match metadata.valid_labels {
        Some(labels) if labels.is_empty() => {
            return Err(ProjectError::EmptyLabelSet {
                path: manifest_path,
            });
        }
        Some(labels) => labels,
        None => LabelSet::default(),
    };

    let changelog_path = project.root.join(
        metadata
            .changelog
            .as_deref()
            .unwrap_or(crate::DEFAULT_CHANGELOG_FILE),
    );

    Ok(PrlogConfig {
        repository_url,
        changelog_path,
        release_branch: metadata.release_branch,
        labels,
    })
}

fn workspace_repository(manifest: &CargoManifest) -> Option<String> {
    manifest
        .workspace
        .as_ref()
        .and_then(|ws| ws.package.as_ref())
        .and_then(|pkg| pkg.repository.clone())
}

fn resolve_repository(
    manifest: &CargoManifest,
    manifest_path: &Path,
) -> Result<Option<String>, ProjectError> {
    let package_field = manifest
        .package
        .as_ref()
        .and_then(|pkg| pkg.repository.as_ref());

    match package_field {
        Some(RepositoryField::Literal(url)) => Ok(Some(url.clone())),
        Some(RepositoryField::Inherited(inherited)) if inherited.workspace => {
            workspace_repository(manifest)
                .map(Some)
                .ok_or_else(|| ProjectError::MissingWorkspaceField {
                    path: manifest_path.to_path_buf(),
                    field: "workspace.package.repository",
                })
        }
        Some(RepositoryField::Inherited(_)) | None => Ok(workspace_repository(manifest)),
    }
}

fn merged_metadata(manifest: &CargoManifest) -> PrlogMetadata {
    let package = manifest
        .package
        .as_ref()
        .and_then(|pkg| pkg.metadata.as_ref())
        .and_then(|meta| meta.prlog.clone())
        .unwrap_or_default();

    let workspace = manifest
        .workspace
        .as_ref()
        .and_then(|ws| ws.metadata.as_ref())
        .and_then(|meta| meta.prlog.clone())
        .unwrap_or_default();

    PrlogMetadata {
        changelog: package.changelog.or(workspace.changelog),
        release_branch: package.release_branch.or(workspace.release_branch),
        valid_labels: package.valid_labels.or(workspace.valid_labels),
    }
}
