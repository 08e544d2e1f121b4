use std::time::Duration;

use prlog_core::RepositoryId;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::GitHubError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_URL_ENV: &str = "PRLOG_GITHUB_API_URL";
const TOKEN_ENV: &str = "GITHUB_TOKEN";
const USER_AGENT: &str = "cargo-prlog";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Label {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub api_url: String,
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl GitHubConfig {
    /// Reads `PRLOG_GITHUB_API_URL` and `GITHUB_TOKEN`; empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_url: non_empty(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: non_empty(TOKEN_ENV),
        }
    }
}

pub struct GitHubClient {
    http: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the HTTP client cannot be initialized.
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Fetches the names of all labels attached to issue or pull request `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] on transport or decoding failures and
    /// [`GitHubError::Api`] if GitHub answers with an error status.
    pub fn issue_labels(
        &self,
        repository: &RepositoryId,
        id: u64,
    ) -> Result<Vec<String>, GitHubError> {
        let url = labels_url(&self.config.api_url, repository, id);

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GitHubError::Api {
                url,
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let labels: Vec<Label> = response.json()?;
        debug!(repository = %repository, id, count = labels.len(), "fetched labels");

        Ok(labels.into_iter().map(|label| label.name).collect())
    }
}

fn labels_url(api_url: &str, repository: &RepositoryId, id: u64) -> String {
    format!(
        "{}/repos/{}/{}/issues/{id}/labels?per_page=100",
        api_url.trim_end_matches('/'),
        repository.owner(),
        repository.name()
    )
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
