mod error;
mod format;
mod prepend;

pub use error::ChangelogError;
pub use format::{format_pull_request, format_release, format_section, format_version_header};
pub use prepend::prepend_to_file;

pub type Result<T> = std::result::Result<T, ChangelogError>;
