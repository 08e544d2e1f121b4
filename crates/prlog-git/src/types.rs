use semver::Version;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub target_sha: String,
}

/// A tag whose name parses as a semantic version, with or without a `v` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub tag: TagInfo,
    pub version: Version,
}

/// A merge commit created by merging a pull request on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMerge {
    pub sha: String,
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
}

impl Divergence {
    #[must_use]
    pub fn is_in_sync(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}
