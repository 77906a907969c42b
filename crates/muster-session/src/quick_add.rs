use muster_core::{ToggleValue, TriState};

use crate::ledger::SelectionLedger;

/// Introduces labels not present in the label universe, seeding them checked
/// and folding them into the same ledger and planning flow.
///
/// New labels go in as explicit ledger entries; the aggregated index is
/// never mutated retroactively.
#[derive(Debug, Default)]
pub struct QuickAddRegistry {
    added: Vec<String>,
}

impl QuickAddRegistry {
    /// Add `text` as a label.
    ///
    /// Surrounding whitespace is trimmed; an empty name is a no-op. A name
    /// already in the ledger is driven to checked instead of duplicated
    /// (locked entries are left alone). Returns whether the ledger changed.
    pub fn add_new(&mut self, ledger: &mut SelectionLedger, text: &str) -> bool {
        let label = text.trim();
        if label.is_empty() {
            return false;
        }
        if ledger.contains(label) {
            return ledger.force_checked(label);
        }
        ledger.seed(label.to_string(), TriState::unlocked(ToggleValue::On));
        self.added.push(label.to_string());
        true
    }

    /// Labels introduced this session, in insertion order.
    pub fn added(&self) -> &[String] {
        &self.added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_core::{Agent, Membership, MembershipIndex, Origin};

    fn ledger_for(selected: &[Agent], known: &[&str]) -> SelectionLedger {
        let known: Vec<String> = known.iter().map(|s| s.to_string()).collect();
        let index = MembershipIndex::build(selected, &known).unwrap();
        SelectionLedger::from_index(&index)
    }

    #[test]
    fn new_label_is_seeded_checked_and_unlocked() {
        let selected = [Agent::new("a1", vec![]), Agent::new("a2", vec![])];
        let mut ledger = ledger_for(&selected, &[]);
        let mut registry = QuickAddRegistry::default();

        assert!(registry.add_new(&mut ledger, "gpu"));
        let state = ledger.state("gpu").unwrap();
        assert_eq!(state.value, ToggleValue::On);
        assert!(!state.locked);
        assert!(state.advisory.is_empty());
        assert_eq!(registry.added(), ["gpu"]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let selected = [Agent::new("a1", vec![])];
        let mut ledger = ledger_for(&selected, &[]);
        let mut registry = QuickAddRegistry::default();

        assert!(registry.add_new(&mut ledger, "  gpu  "));
        assert!(ledger.contains("gpu"));
        assert!(!ledger.contains("  gpu  "));
    }

    #[test]
    fn empty_and_blank_input_are_no_ops() {
        let selected = [Agent::new("a1", vec![])];
        let mut ledger = ledger_for(&selected, &[]);
        let mut registry = QuickAddRegistry::default();

        assert!(!registry.add_new(&mut ledger, ""));
        assert!(!registry.add_new(&mut ledger, "   "));
        assert!(ledger.is_empty());
        assert!(registry.added().is_empty());
    }

    #[test]
    fn existing_label_is_driven_to_checked_not_duplicated() {
        let selected = [
            Agent::new("a1", vec![Membership::new("uat", Origin::Editable)]),
            Agent::new("a2", vec![]),
        ];
        let mut ledger = ledger_for(&selected, &["uat"]);
        let mut registry = QuickAddRegistry::default();

        assert_eq!(ledger.state("uat").unwrap().value, ToggleValue::Mixed);
        assert!(registry.add_new(&mut ledger, "uat"));
        assert_eq!(ledger.state("uat").unwrap().value, ToggleValue::On);
        assert_eq!(ledger.len(), 1);
        // Not a session-introduced label; it already existed.
        assert!(registry.added().is_empty());
    }

    #[test]
    fn existing_locked_label_is_left_alone() {
        let selected = [Agent::new(
            "a1",
            vec![Membership::new("prod", Origin::External)],
        )];
        let mut ledger = ledger_for(&selected, &["prod"]);
        let mut registry = QuickAddRegistry::default();

        assert!(!registry.add_new(&mut ledger, "prod"));
        assert!(ledger.state("prod").unwrap().locked);
    }

    #[test]
    fn quick_added_label_flows_into_the_plan() {
        use crate::planner::Plan;

        let selected = [Agent::new("a1", vec![]), Agent::new("a2", vec![])];
        let mut ledger = ledger_for(&selected, &[]);
        let mut registry = QuickAddRegistry::default();

        registry.add_new(&mut ledger, "gpu");
        let plan = Plan::reconcile(&ledger);
        assert_eq!(plan.add, vec!["gpu"]);
        assert!(plan.remove.is_empty());
    }

    #[test]
    fn quick_added_label_can_be_toggled_off_again() {
        let selected = [Agent::new("a1", vec![])];
        let mut ledger = ledger_for(&selected, &[]);
        let mut registry = QuickAddRegistry::default();

        registry.add_new(&mut ledger, "gpu");
        ledger.click("gpu");
        assert_eq!(ledger.state("gpu").unwrap().value, ToggleValue::Off);
    }
}
