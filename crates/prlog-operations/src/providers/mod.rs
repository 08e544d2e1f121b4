mod changelog;
mod git;
mod project;
mod pull_requests;

pub use changelog::{FileSystemChangelogPrepender, MarkdownRenderer};
pub use git::Git2WorkingTreeGuard;
pub use project::FileSystemProjectProvider;
pub use pull_requests::{GitHubPullRequestSource, LabelLookup};
