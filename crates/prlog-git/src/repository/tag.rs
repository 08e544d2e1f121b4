use semver::Version;

use crate::{Result, TagInfo, VersionTag};

use super::Repository;

impl Repository {
    /// Finds the tag with the highest semantic version. Tags that do not parse
    /// as a version (after stripping an optional `v` prefix) are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be listed or a version tag cannot be peeled to a commit.
    pub fn latest_version_tag(&self) -> Result<Option<VersionTag>> {
        let names = self.inner.tag_names(None)?;

        let latest = names
            .iter()
            .flatten()
            .filter_map(|name| parse_tag_version(name).map(|version| (name, version)))
            .max_by(|(_, a), (_, b)| a.cmp_precedence(b));

        let Some((name, version)) = latest else {
            return Ok(None);
        };

        let target = self
            .inner
            .revparse_single(&format!("refs/tags/{name}"))?
            .peel_to_commit()?;

        Ok(Some(VersionTag {
            tag: TagInfo {
                name: name.to_string(),
                target_sha: target.id().to_string(),
            },
            version,
        }))
    }
}

fn parse_tag_version(name: &str) -> Option<Version> {
    let raw = name.strip_prefix('v').unwrap_or(name);
    Version::parse(raw).ok()
}
