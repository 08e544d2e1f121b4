use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("version-number not specified")]
    Missing,

    #[error("version-number '{version}' is invalid")]
    Invalid {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Checks that a release version was given and is a valid semantic version.
///
/// # Errors
///
/// Returns [`VersionError::Missing`] for `None` or an empty string, and
/// [`VersionError::Invalid`] when the input does not parse as semver.
pub fn validate_version(version: Option<&str>) -> Result<Version, VersionError> {
    let version = match version {
        Some(v) if !v.is_empty() => v,
        _ => return Err(VersionError::Missing),
    };

    Version::parse(version).map_err(|source| VersionError::Invalid {
        version: version.to_string(),
        source,
    })
}
