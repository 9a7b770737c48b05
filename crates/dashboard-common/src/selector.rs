//! Label selector matching
//!
//! Decides whether an object carrying a selector (a service, a replication
//! controller, a deployment) targets an object carrying labels (a pod).
//! Matching is an exact, case-sensitive conjunction over the selector
//! entries; the candidate may carry any number of extra labels.

use crate::meta::ObjectMeta;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use std::collections::BTreeMap;

/// Returns true when every selector entry is present with an equal value in
/// `labels`.
///
/// An empty selector targets nothing and always returns false.
pub fn is_selector_matching(
    selector: &BTreeMap<String, String>,
    labels: &BTreeMap<String, String>,
) -> bool {
    if selector.is_empty() {
        return false;
    }

    selector
        .iter()
        .all(|(key, value)| labels.get(key).is_some_and(|v| v == value))
}

/// Same predicate over the `matchLabels` of a structured selector.
///
/// `matchExpressions` are not evaluated. A selector carrying any expression
/// targets nothing rather than over-matching on its labels alone.
pub fn is_label_selector_matching(
    selector: &LabelSelector,
    labels: &BTreeMap<String, String>,
) -> bool {
    if selector
        .match_expressions
        .as_ref()
        .is_some_and(|expressions| !expressions.is_empty())
    {
        return false;
    }

    match &selector.match_labels {
        Some(match_labels) => is_selector_matching(match_labels, labels),
        None => false,
    }
}

/// Keep the items whose metadata labels `selector` matches, in input order
pub fn filter_by_selector<'a, T, I>(selector: &BTreeMap<String, String>, items: I) -> Vec<&'a T>
where
    T: AsRef<ObjectMeta> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| is_selector_matching(selector, &item.as_ref().labels))
        .collect()
}
