use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request to GitHub failed")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for '{url}': {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("pull request #{id} has no label of {}", valid.join(", "))]
    NoValidLabel { id: u64, valid: Vec<String> },

    #[error("pull request #{id} has multiple labels of {}", valid.join(", "))]
    MultipleValidLabels {
        id: u64,
        labels: Vec<String>,
        valid: Vec<String>,
    },
}
