use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prlog_changelog::ChangelogError;
use prlog_core::{LabelSet, PullRequest, RepositoryId};
use prlog_git::GitError;
use semver::Version;

use crate::traits::{
    ChangelogPrepender, ChangelogRenderer, ProjectProvider, PullRequestSource, WorkingTreeGuard,
};
use crate::{OperationError, ProjectSettings, Result};

pub struct MockProjectProvider {
    settings: ProjectSettings,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        let root = PathBuf::from("/mock/project");
        Self {
            settings: ProjectSettings {
                changelog_path: root.join("CHANGELOG.md"),
                root,
                repository: RepositoryId::new("acme", "widgets"),
                labels: LabelSet::default(),
                release_branch: None,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_release_branch(mut self, branch: &str) -> Self {
        self.settings.release_branch = Some(branch.to_string());
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.settings.labels = labels;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

impl Default for MockProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for MockProjectProvider {
    fn load_settings(&self, start_path: &Path) -> Result<ProjectSettings> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(start_path.to_path_buf());
        Ok(self.settings.clone())
    }
}

pub struct MockWorkingTreeGuard {
    is_clean: bool,
    calls: Mutex<Vec<Option<String>>>,
}

impl MockWorkingTreeGuard {
    #[must_use]
    pub fn clean() -> Self {
        Self {
            is_clean: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn dirty() -> Self {
        Self {
            is_clean: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Release branches the guard was asked to check, one entry per call.
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl WorkingTreeGuard for MockWorkingTreeGuard {
    fn ensure_clean(
        &self,
        _project_root: &Path,
        _repository: &RepositoryId,
        release_branch: Option<&str>,
    ) -> Result<()> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(release_branch.map(str::to_string));
        if self.is_clean {
            Ok(())
        } else {
            Err(OperationError::Git(GitError::DirtyWorkingTree))
        }
    }
}

pub struct MockPullRequestSource {
    pull_requests: Vec<PullRequest>,
    calls: Mutex<Vec<RepositoryId>>,
}

impl MockPullRequestSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pull_requests: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_pull_request(mut self, id: u64, title: &str, label: &str) -> Self {
        self.pull_requests.push(PullRequest::new(id, title, label));
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

impl Default for MockPullRequestSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PullRequestSource for MockPullRequestSource {
    fn merged_pull_requests(
        &self,
        _project_root: &Path,
        repository: &RepositoryId,
        _labels: &LabelSet,
    ) -> Result<Vec<PullRequest>> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(repository.clone());
        Ok(self.pull_requests.clone())
    }
}

/// Renders a fixed text regardless of input and records what it was given.
pub struct MockRenderer {
    text: String,
    rendered: Mutex<Vec<(Version, Vec<PullRequest>)>>,
}

impl MockRenderer {
    #[must_use]
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            rendered: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn rendered(&self) -> Vec<(Version, Vec<PullRequest>)> {
        self.rendered.lock().expect("lock poisoned").clone()
    }
}

impl ChangelogRenderer for MockRenderer {
    fn render(
        &self,
        version: &Version,
        _labels: &LabelSet,
        pull_requests: &[PullRequest],
        _repository: &RepositoryId,
    ) -> Result<String> {
        self.rendered
            .lock()
            .expect("lock poisoned")
            .push((version.clone(), pull_requests.to_vec()));
        Ok(self.text.clone())
    }
}

/// In-memory changelog files keyed by path.
pub struct MockChangelogPrepender {
    files: Mutex<HashMap<PathBuf, String>>,
    fail: bool,
}

impl MockChangelogPrepender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            fail: false,
        }
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path.into(), contents.to_string());
        self
    }

    /// Existing files can be read but every rewrite fails.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("lock poisoned").get(path).cloned()
    }
}

impl Default for MockChangelogPrepender {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogPrepender for MockChangelogPrepender {
    fn prepend(&self, path: &Path, text: &str) -> Result<()> {
        let mut files = self.files.lock().expect("lock poisoned");
        let Some(existing) = files.get(path).cloned() else {
            return Err(OperationError::Changelog(ChangelogError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock missing"),
            }));
        };
        if self.fail {
            return Err(OperationError::Changelog(ChangelogError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock denied"),
            }));
        }
        files.insert(path.to_path_buf(), format!("{text}{existing}"));
        Ok(())
    }
}
