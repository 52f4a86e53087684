//! Sibling arm merging.
//!
//! Arms of one dispatch whose rendered bodies are byte-identical are
//! emitted once with all their labels. Identity is purely textual.

use std::collections::BTreeMap;

use crate::trie::Key;

/// One emitted arm: every label that dispatches to `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedArm {
    /// Labels in the order they were supplied.
    pub labels: Vec<Key>,
    pub body: String,
}

impl MergedArm {
    pub fn has_default(&self) -> bool {
        self.labels.contains(&Key::End)
    }
}

/// Group `(label, body)` pairs by body text.
///
/// Groups come back ordered by body text so the output is a total order of
/// its input.
pub fn merge_arms(rendered: Vec<(Key, String)>) -> Vec<MergedArm> {
    let mut by_body: BTreeMap<String, Vec<Key>> = BTreeMap::new();
    for (key, body) in rendered {
        by_body.entry(body).or_default().push(key);
    }
    by_body
        .into_iter()
        .map(|(body, labels)| MergedArm { labels, body })
        .collect()
}

/// Number of labels that share a body with an earlier label.
pub fn saved_bodies(arms: &[MergedArm]) -> usize {
    arms.iter().map(|arm| arm.labels.len().saturating_sub(1)).sum()
}
