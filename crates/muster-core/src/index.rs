use std::collections::{BTreeMap, BTreeSet};

use crate::error::SelectionError;
use crate::membership::{Agent, Origin};
use crate::tristate::{advisory, ToggleValue, TriState};

/// Aggregated initial toggle state for every label visible to a selection.
///
/// Recomputed from scratch each time the edit panel opens; never patched
/// incrementally. The selection itself is never mutated here.
#[derive(Debug, Clone)]
pub struct MembershipIndex {
    entries: BTreeMap<String, TriState>,
}

impl MembershipIndex {
    /// Aggregate the selected agents' memberships into per-label toggles.
    ///
    /// The label set is the union of `known_labels` and every label held by
    /// the selection, so a label referenced only through unresolved records
    /// still gets an entry.
    pub fn build(selected: &[Agent], known_labels: &[String]) -> Result<Self, SelectionError> {
        if selected.is_empty() {
            return Err(SelectionError::EmptySelection);
        }

        let mut labels: BTreeSet<&str> = known_labels.iter().map(String::as_str).collect();
        for agent in selected {
            for membership in &agent.memberships {
                labels.insert(&membership.label);
            }
        }

        let total = selected.len();
        let mut entries = BTreeMap::new();
        for label in labels {
            entries.insert(label.to_string(), aggregate(selected, label, total));
        }
        tracing::debug!(
            labels = entries.len(),
            agents = total,
            "built membership index"
        );
        Ok(MembershipIndex { entries })
    }

    pub fn state(&self, label: &str) -> Option<&TriState> {
        self.entries.get(label)
    }

    /// All entries, ordered by label.
    pub fn entries(&self) -> &BTreeMap<String, TriState> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counting rule for one label. Each agent counts at most once per bucket,
/// whatever its individual records look like.
fn aggregate(selected: &[Agent], label: &str, total: usize) -> TriState {
    let match_count = selected.iter().filter(|a| a.holds(label)).count();
    let external_count = selected
        .iter()
        .filter(|a| a.holds_via(label, Origin::External))
        .count();
    let unresolved_count = selected
        .iter()
        .filter(|a| a.holds_via(label, Origin::Unresolved))
        .count();

    let value = if match_count == 0 {
        ToggleValue::Off
    } else if match_count == total {
        ToggleValue::On
    } else {
        ToggleValue::Mixed
    };

    // A uniformly unresolved association is still a well-defined bulk edit;
    // partial ambiguity is not.
    if external_count > 0 {
        TriState::locked(value, advisory::EXTERNAL)
    } else if unresolved_count > 0 && unresolved_count != total {
        TriState::locked(value, advisory::UNRESOLVED)
    } else {
        TriState::unlocked(value)
    }
}
