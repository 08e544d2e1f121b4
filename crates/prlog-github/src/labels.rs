use prlog_core::LabelSet;

use crate::error::GitHubError;

/// Picks the single label of `valid` attached to pull request `id`.
///
/// # Errors
///
/// Returns [`GitHubError::NoValidLabel`] if none of `labels` is in `valid`, and
/// [`GitHubError::MultipleValidLabels`] if more than one is.
pub fn select_label(id: u64, labels: &[String], valid: &LabelSet) -> Result<String, GitHubError> {
    let matching: Vec<String> = labels
        .iter()
        .filter(|label| valid.contains(label))
        .cloned()
        .collect();

    match matching.as_slice() {
        [label] => Ok(label.clone()),
        [] => Err(GitHubError::NoValidLabel {
            id,
            valid: valid.names().map(String::from).collect(),
        }),
        _ => Err(GitHubError::MultipleValidLabels {
            id,
            labels: matching,
            valid: valid.names().map(String::from).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn picks_the_only_valid_label() {
        let result = select_label(1, &labels(&["needs-review", "bug"]), &LabelSet::default());

        assert_eq!(result.expect("one valid label"), "bug");
    }

    #[test]
    fn rejects_pull_request_without_valid_label() {
        let result = select_label(2, &labels(&["question"]), &LabelSet::default());

        assert!(matches!(result, Err(GitHubError::NoValidLabel { id: 2, .. })));
    }

    #[test]
    fn rejects_pull_request_with_two_valid_labels() {
        let result = select_label(3, &labels(&["bug", "feature"]), &LabelSet::default());

        match result {
            Err(GitHubError::MultipleValidLabels { id, labels, .. }) => {
                assert_eq!(id, 3);
                assert_eq!(labels, ["bug", "feature"]);
            }
            other => panic!("expected MultipleValidLabels, got {other:?}"),
        }
    }

    #[test]
    fn respects_custom_label_set() {
        let valid: LabelSet = [("fix".to_string(), "Fixes".to_string())]
            .into_iter()
            .collect();

        let result = select_label(4, &labels(&["bug", "fix"]), &valid);

        assert_eq!(result.expect("one valid label"), "fix");
    }
}
