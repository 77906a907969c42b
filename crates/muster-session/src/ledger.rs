use std::collections::BTreeMap;

use muster_core::{MembershipIndex, ToggleValue, TriState};

/// Per-session mutable map of label → toggle state.
///
/// Owned exclusively by one open editing session; discarded when the session
/// commits or is cancelled. Clicks are applied strictly in the order they
/// arrive, each immediately visible to the next.
#[derive(Debug, Clone)]
pub struct SelectionLedger {
    entries: BTreeMap<String, TriState>,
}

impl SelectionLedger {
    /// Snapshot the aggregated index. The index stays untouched; the ledger
    /// owns its own copy for the lifetime of the session.
    pub fn from_index(index: &MembershipIndex) -> Self {
        SelectionLedger {
            entries: index.entries().clone(),
        }
    }

    /// Apply one user click to a label's toggle.
    ///
    /// A click on a label the ledger does not know indicates a UI/state
    /// desync; it is logged and swallowed rather than surfaced.
    pub fn click(&mut self, label: &str) {
        match self.entries.get_mut(label) {
            Some(entry) => *entry = entry.toggled(),
            None => tracing::warn!(label, "click on unknown label ignored"),
        }
    }

    pub fn state(&self, label: &str) -> Option<&TriState> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// All entries, ordered by label.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TriState)> + '_ {
        self.entries.iter().map(|(label, state)| (label.as_str(), state))
    }

    /// Labels currently checked, ordered by label.
    pub fn committed_on(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, state)| state.is_checked())
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// Labels currently unchecked, ordered by label. Entries still mixed
    /// appear in neither list.
    pub fn committed_off(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, state)| state.is_unchecked())
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a fresh entry. Used by quick add for labels outside the
    /// universe; aggregation output is never patched through here.
    pub(crate) fn seed(&mut self, label: String, state: TriState) {
        self.entries.insert(label, state);
    }

    /// Drive an existing entry to checked. Locked entries are left alone.
    /// Returns whether the entry changed.
    pub(crate) fn force_checked(&mut self, label: &str) -> bool {
        match self.entries.get_mut(label) {
            Some(entry) if !entry.locked && entry.value != ToggleValue::On => {
                entry.value = ToggleValue::On;
                true
            }
            _ => false,
        }
    }
}
