use std::fmt;

use url::Url;

use crate::error::CoreError;

/// Owner/name pair identifying a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses the forms found in `Cargo.toml` `repository` fields and git remotes:
    /// `https://github.com/owner/name(.git)`, `git+https://...`, `ssh://git@host/owner/name`,
    /// `git@host:owner/name.git`, `github:owner/name` and bare `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UrlParse` if the URL is invalid and
    /// `CoreError::InvalidRepositoryPath` if it lacks an owner or name segment.
    pub fn from_url(url_str: &str) -> Result<Self, CoreError> {
        let trimmed = url_str.trim();

        if let Some(shorthand) = trimmed.strip_prefix("github:") {
            return parse_path(shorthand, url_str);
        }

        if is_bare_shorthand(trimmed) {
            return parse_path(trimmed, url_str);
        }

        let normalized = normalize_scp_like(trimmed);
        let normalized = normalized.strip_prefix("git+").unwrap_or(&normalized);

        let url = Url::parse(normalized).map_err(|source| CoreError::UrlParse {
            url: url_str.to_string(),
            source,
        })?;

        if url.host_str().is_none() {
            return Err(CoreError::UrlParse {
                url: url_str.to_string(),
                source: url::ParseError::EmptyHost,
            });
        }

        parse_path(url.path(), url_str)
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pull_request_url(&self, id: u64) -> String {
        format!("https://github.com/{}/{}/pull/{id}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_bare_shorthand(s: &str) -> bool {
    !s.contains(':') && !s.starts_with('/') && s.matches('/').count() == 1
}

// `git@github.com:owner/name.git` has no scheme; rewrite it as an ssh URL.
fn normalize_scp_like(s: &str) -> String {
    if s.contains("://") {
        return s.to_string();
    }

    match s.split_once(':') {
        Some((host, path)) if host.contains('@') && !path.starts_with('/') => {
            format!("ssh://{host}/{path}")
        }
        _ => s.to_string(),
    }
}

fn parse_path(path: &str, original: &str) -> Result<RepositoryId, CoreError> {
    let path = path.trim_start_matches('/').trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() < 2 {
        return Err(CoreError::InvalidRepositoryPath {
            url: original.to_string(),
        });
    }

    Ok(RepositoryId::new(segments[0], segments[1]))
}
