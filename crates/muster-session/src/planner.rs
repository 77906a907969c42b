use serde::{Deserialize, Serialize};

use muster_core::ToggleValue;

use crate::ledger::SelectionLedger;

/// Minimal add/remove label pair handed to the apply collaborator.
///
/// Immutable once computed; consumed exactly once per commit. Applying the
/// same plan twice yields the same memberships as applying it once — the
/// backend's add/remove semantics are idempotent, and a label never appears
/// in both lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl Plan {
    /// Diff the ledger's end state into add/remove lists.
    ///
    /// Checked entries go to `add`, unchecked to `remove`. Locked entries
    /// never contribute, whatever they read as; entries still mixed were
    /// never touched and stay out of both lists.
    pub fn reconcile(ledger: &SelectionLedger) -> Plan {
        let mut plan = Plan::default();
        for (label, state) in ledger.entries() {
            if state.locked {
                continue;
            }
            match state.value {
                ToggleValue::On => plan.add.push(label.to_string()),
                ToggleValue::Off => plan.remove.push(label.to_string()),
                ToggleValue::Mixed => {}
            }
        }
        // An entry has exactly one value, so this cannot fire; if it does,
        // the ledger itself is corrupt.
        debug_assert!(
            plan.add.iter().all(|label| !plan.remove.contains(label)),
            "label present in both add and remove"
        );
        plan
    }

    /// An empty plan is a valid commit meaning "no changes".
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}
