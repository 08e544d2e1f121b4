use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("bug", "Bug Fixes"),
    ("upgrade", "Dependency Upgrades"),
    ("documentation", "Documentation"),
    ("feature", "Features"),
    ("enhancement", "Enhancements"),
    ("build", "Build-Related"),
    ("breaking", "Breaking Changes"),
];

/// Ordered mapping of pull-request label names to changelog section titles.
///
/// Iteration order is the order in which sections are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(IndexMap<String, String>);

impl LabelSet {
    #[must_use]
    pub fn new(labels: IndexMap<String, String>) -> Self {
        Self(labels)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    #[must_use]
    pub fn title(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        DEFAULT_LABELS
            .iter()
            .map(|(name, title)| ((*name).to_string(), (*title).to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for LabelSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A merged pull request, classified by exactly one label of the active [`LabelSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub title: String,
    pub label: String,
}

impl PullRequest {
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            label: label.into(),
        }
    }
}
