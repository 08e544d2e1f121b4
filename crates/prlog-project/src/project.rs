use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::manifest::read_manifest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoProject {
    pub root: PathBuf,
}

impl CargoProject {
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }
}

/// # Errors
///
/// Returns `ProjectError` if no project root can be found or if manifest parsing fails.
pub fn discover_project(start_dir: &Path) -> Result<CargoProject, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = find_project_root(&start_dir)?;

    Ok(CargoProject { root })
}

/// The nearest enclosing workspace root, or else the nearest package root.
fn find_project_root(start_dir: &Path) -> Result<PathBuf, ProjectError> {
    let mut current = start_dir.to_path_buf();
    let mut fallback_single_package: Option<PathBuf> = None;

    loop {
        let manifest_path = current.join("Cargo.toml");

        if manifest_path.exists() {
            let manifest = read_manifest(&manifest_path)?;

            if manifest.workspace.is_some() {
                return Ok(current);
            }

            if manifest.package.is_some() && fallback_single_package.is_none() {
                fallback_single_package = Some(current.clone());
            }
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return fallback_single_package.ok_or_else(|| ProjectError::NotFound {
                    start_dir: start_dir.to_path_buf(),
                });
            }
        }
    }
}
