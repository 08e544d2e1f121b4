use std::path::Path;

use prlog_core::LabelSet;
use serde::Deserialize;

use crate::error::ProjectError;

#[derive(Debug, Deserialize)]
pub(crate) struct CargoManifest {
    pub(crate) package: Option<Package>,
    pub(crate) workspace: Option<WorkspaceSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Package {
    pub(crate) repository: Option<RepositoryField>,
    pub(crate) metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RepositoryField {
    Literal(String),
    Inherited(InheritedField),
}

#[derive(Debug, Deserialize)]
pub(crate) struct InheritedField {
    pub(crate) workspace: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceSection {
    pub(crate) package: Option<WorkspacePackage>,
    pub(crate) metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspacePackage {
    pub(crate) repository: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct Metadata {
    pub(crate) prlog: Option<PrlogMetadata>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct PrlogMetadata {
    pub(crate) changelog: Option<String>,
    pub(crate) release_branch: Option<String>,
    pub(crate) valid_labels: Option<LabelSet>,
}

pub(crate) fn read_manifest(path: &Path) -> Result<CargoManifest, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
