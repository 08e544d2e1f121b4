mod changelog_writer;
mod project_provider;
mod pull_request_source;
mod renderer;
mod working_tree_guard;

pub use changelog_writer::ChangelogPrepender;
pub use project_provider::ProjectProvider;
pub use pull_request_source::PullRequestSource;
pub use renderer::ChangelogRenderer;
pub use working_tree_guard::WorkingTreeGuard;
