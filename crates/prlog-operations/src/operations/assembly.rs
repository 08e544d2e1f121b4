use std::path::Path;

use prlog_core::{LabelSet, RepositoryId};
use semver::Version;
use tracing::debug;

use crate::Result;
use crate::traits::{ChangelogRenderer, PullRequestSource};

/// Collapses one trailing blank line: text ending in `"\n\n"` loses its final
/// newline. Any other text is returned unchanged.
#[must_use]
pub fn normalize_trailing_newline(text: &str) -> String {
    match text.strip_suffix("\n\n") {
        Some(stripped) => format!("{stripped}\n"),
        None => text.to_string(),
    }
}

/// Retrieves the merged pull requests, renders them as the release entry for
/// `version` and normalizes the trailing newline.
///
/// # Errors
///
/// Propagates the first retrieval or rendering failure unchanged.
pub fn assemble_changelog<S, R>(
    source: &S,
    renderer: &R,
    version: &Version,
    labels: &LabelSet,
    repository: &RepositoryId,
    project_root: &Path,
) -> Result<String>
where
    S: PullRequestSource + ?Sized,
    R: ChangelogRenderer + ?Sized,
{
    assemble(source, renderer, version, labels, repository, project_root).map(|(text, _)| text)
}

/// Like [`assemble_changelog`], also returning how many pull requests went in.
pub(crate) fn assemble<S, R>(
    source: &S,
    renderer: &R,
    version: &Version,
    labels: &LabelSet,
    repository: &RepositoryId,
    project_root: &Path,
) -> Result<(String, usize)>
where
    S: PullRequestSource + ?Sized,
    R: ChangelogRenderer + ?Sized,
{
    let pull_requests = source.merged_pull_requests(project_root, repository, labels)?;
    debug!(count = pull_requests.len(), "retrieved merged pull requests");

    let rendered = renderer.render(version, labels, &pull_requests, repository)?;
    Ok((normalize_trailing_newline(&rendered), pull_requests.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockPullRequestSource, MockRenderer};

    #[test]
    fn collapses_single_trailing_blank_line() {
        assert_eq!(normalize_trailing_newline("release notes\n\n"), "release notes\n");
    }

    #[test]
    fn collapses_only_once() {
        assert_eq!(normalize_trailing_newline("notes\n\n\n"), "notes\n\n");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(normalize_trailing_newline("notes\n"), "notes\n");
        assert_eq!(normalize_trailing_newline("notes"), "notes");
        assert_eq!(normalize_trailing_newline(""), "");
        assert_eq!(normalize_trailing_newline("\n"), "\n");
    }

    #[test]
    fn lone_blank_line_collapses_to_newline() {
        assert_eq!(normalize_trailing_newline("\n\n"), "\n");
    }

    #[test]
    fn renders_retrieved_pull_requests() -> anyhow::Result<()> {
        let source = MockPullRequestSource::new()
            .with_pull_request(2, "Fix crash", "bug")
            .with_pull_request(1, "Add export", "feature");
        let renderer = MockRenderer::returning("## 1.2.0\n\n");
        let version = Version::new(1, 2, 0);

        let text = assemble_changelog(
            &source,
            &renderer,
            &version,
            &LabelSet::default(),
            &RepositoryId::new("acme", "widgets"),
            Path::new("/mock/project"),
        )?;

        assert_eq!(text, "## 1.2.0\n");
        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0, version);
        assert_eq!(rendered[0].1.len(), 2);
        assert_eq!(source.call_count(), 1);
        Ok(())
    }
}
