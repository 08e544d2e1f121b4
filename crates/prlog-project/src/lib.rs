mod config;
mod error;
mod manifest;
mod project;

pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

pub use config::{PrlogConfig, load_config};
pub use error::ProjectError;
pub use project::{CargoProject, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
