use chrono::NaiveDate;
use semver::Version;

use prlog_core::{LabelSet, PullRequest, RepositoryId};

#[must_use]
pub fn format_version_header(version: &Version, date: NaiveDate) -> String {
    format!("## {version} ({})\n\n", date.format("%B %-d, %Y"))
}

#[must_use]
pub fn format_pull_request(pull_request: &PullRequest, repository: &RepositoryId) -> String {
    format!(
        "* {} ([#{}]({}))\n",
        pull_request.title,
        pull_request.id,
        repository.pull_request_url(pull_request.id)
    )
}

#[must_use]
pub fn format_section(
    title: &str,
    pull_requests: &[&PullRequest],
    repository: &RepositoryId,
) -> String {
    let mut output = format!("### {title}\n\n");
    for pull_request in pull_requests {
        output.push_str(&format_pull_request(pull_request, repository));
    }
    output.push('\n');
    output
}

/// Renders one release entry: a version header followed by one section per
/// label that has pull requests, in label-set order.
///
/// The entry always ends in `"\n\n\n"`. Collapsing one trailing blank line
/// leaves exactly one blank line between this entry and the previous release.
#[must_use]
pub fn format_release(
    version: &Version,
    date: NaiveDate,
    labels: &LabelSet,
    pull_requests: &[PullRequest],
    repository: &RepositoryId,
) -> String {
    let mut output = format_version_header(version, date);

    for (label, title) in labels.iter() {
        let section: Vec<&PullRequest> = pull_requests
            .iter()
            .filter(|pr| pr.label == label)
            .collect();

        if !section.is_empty() {
            output.push_str(&format_section(title, &section, repository));
        }
    }

    output.push('\n');
    output
}
