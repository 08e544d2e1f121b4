use std::path::Path;

use chrono::{Local, NaiveDate};
use prlog_changelog::{format_release, prepend_to_file};
use prlog_core::{LabelSet, PullRequest, RepositoryId};
use semver::Version;

use crate::Result;
use crate::traits::{ChangelogPrepender, ChangelogRenderer};

/// Renders release entries as Markdown, dated today unless a date is fixed.
pub struct MarkdownRenderer {
    date: Option<NaiveDate>,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self { date: None }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    fn render(
        &self,
        version: &Version,
        labels: &LabelSet,
        pull_requests: &[PullRequest],
        repository: &RepositoryId,
    ) -> Result<String> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        Ok(format_release(
            version,
            date,
            labels,
            pull_requests,
            repository,
        ))
    }
}

pub struct FileSystemChangelogPrepender;

impl FileSystemChangelogPrepender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogPrepender {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogPrepender for FileSystemChangelogPrepender {
    fn prepend(&self, path: &Path, text: &str) -> Result<()> {
        Ok(prepend_to_file(path, text)?)
    }
}
