mod client;
mod error;
mod labels;

pub use client::{DEFAULT_API_URL, GitHubClient, GitHubConfig};
pub use error::GitHubError;
pub use labels::select_label;

pub type Result<T> = std::result::Result<T, GitHubError>;
