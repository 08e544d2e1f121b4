use std::path::{Path, PathBuf};

use prlog_version::validate_version;
use tracing::info;

use super::assembly::assemble;
use crate::Result;
use crate::traits::{
    ChangelogPrepender, ChangelogRenderer, ProjectProvider, PullRequestSource, WorkingTreeGuard,
};

#[derive(Debug, Clone, Default)]
pub struct ReleaseNotesInput {
    /// Version number as given on the command line.
    pub version: Option<String>,
    /// Skip the clean working tree check.
    pub sloppy: bool,
}

#[derive(Debug, Clone)]
pub struct ReleaseNotesOutput {
    pub changelog_path: PathBuf,
    pub text: String,
    pub pull_request_count: usize,
}

/// Validates the version, checks the working tree, renders the release entry
/// and prepends it to the changelog. Stops at the first failing step.
pub struct ReleaseNotesOperation<P, G, S, R, W> {
    project_provider: P,
    guard: G,
    source: S,
    renderer: R,
    prepender: W,
}

impl<P, G, S, R, W> ReleaseNotesOperation<P, G, S, R, W>
where
    P: ProjectProvider,
    G: WorkingTreeGuard,
    S: PullRequestSource,
    R: ChangelogRenderer,
    W: ChangelogPrepender,
{
    pub fn new(project_provider: P, guard: G, source: S, renderer: R, prepender: W) -> Self {
        Self {
            project_provider,
            guard,
            source,
            renderer,
            prepender,
        }
    }

    /// # Errors
    ///
    /// Returns the first error raised by version validation, project loading,
    /// the working tree check, pull request retrieval, rendering or the write.
    pub fn execute(
        &self,
        start_path: &Path,
        input: &ReleaseNotesInput,
    ) -> Result<ReleaseNotesOutput> {
        let version = validate_version(input.version.as_deref())?;
        let settings = self.project_provider.load_settings(start_path)?;

        if input.sloppy {
            info!("skipping working tree check");
        } else {
            self.guard.ensure_clean(
                &settings.root,
                &settings.repository,
                settings.release_branch.as_deref(),
            )?;
            info!("working tree is clean");
        }

        let (text, pull_request_count) = assemble(
            &self.source,
            &self.renderer,
            &version,
            &settings.labels,
            &settings.repository,
            &settings.root,
        )?;

        self.prepender.prepend(&settings.changelog_path, &text)?;
        info!(
            version = %version,
            path = %settings.changelog_path.display(),
            "prepended release notes"
        );

        Ok(ReleaseNotesOutput {
            changelog_path: settings.changelog_path,
            text,
            pull_request_count,
        })
    }
}
