use std::path::Path;

use muster_session::EditSession;

use crate::snapshot::{LabelKind, Snapshot};

pub struct PlanParams<'a> {
    pub snapshot_path: &'a Path,
    pub select: &'a [String],
    pub kind: LabelKind,
    pub on: &'a [String],
    pub off: &'a [String],
    pub quick_add: &'a [String],
    pub json: bool,
}

/// `muster plan --snapshot agents.json --select a1 --on uat --off prod`
pub fn execute(params: &PlanParams) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(params.snapshot_path)?;
    let selected = snapshot.select(params.kind, params.select)?;
    let mut session = EditSession::open(&selected, snapshot.universe(params.kind))?;

    let mut skipped = Vec::new();
    for label in params.on {
        if !drive(&mut session, label, true)? {
            skipped.push(label.clone());
        }
    }
    for label in params.off {
        if !drive(&mut session, label, false)? {
            skipped.push(label.clone());
        }
    }
    for label in params.quick_add {
        session.quick_add(label);
    }

    let request = session.commit();
    if params.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    println!(
        "plan for {} agent(s): {}",
        request.agent_ids.len(),
        request.agent_ids.join(", ")
    );
    if request.plan.is_empty() {
        println!("  no changes");
    } else {
        if !request.plan.add.is_empty() {
            println!("  add: {}", request.plan.add.join(", "));
        }
        if !request.plan.remove.is_empty() {
            println!("  remove: {}", request.plan.remove.join(", "));
        }
    }
    if !skipped.is_empty() {
        println!("  skipped (locked): {}", skipped.join(", "));
    }
    Ok(())
}

/// Click `label` until it reads the requested end state. Any unlocked cell
/// reaches either end state within two clicks. Returns false when the label
/// is locked; a label the session does not know is an error.
fn drive(session: &mut EditSession, label: &str, checked: bool) -> anyhow::Result<bool> {
    let Some(state) = session.state(label) else {
        anyhow::bail!("no label \"{label}\" for this selection; use --quick-add to introduce it");
    };
    if state.locked {
        return Ok(false);
    }
    for _ in 0..2 {
        let done = match session.state(label) {
            Some(state) if checked => state.is_checked(),
            Some(state) => state.is_unchecked(),
            None => break,
        };
        if done {
            break;
        }
        session.click(label);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_core::{Agent, Membership, Origin, ToggleValue};

    fn editable(id: &str, labels: &[&str]) -> Agent {
        Agent::new(
            id,
            labels
                .iter()
                .map(|l| Membership::new(*l, Origin::Editable))
                .collect(),
        )
    }

    fn universe(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn drive_reaches_checked_from_any_start() {
        // uat: On, load_test: Mixed, gpu: Off
        let selected = [
            editable("a1", &["uat", "load_test"]),
            editable("a2", &["uat"]),
        ];
        let mut session =
            EditSession::open(&selected, &universe(&["uat", "load_test", "gpu"])).unwrap();

        for label in ["uat", "load_test", "gpu"] {
            assert!(drive(&mut session, label, true).unwrap());
            assert_eq!(session.state(label).unwrap().value, ToggleValue::On);
        }
    }

    #[test]
    fn drive_reaches_unchecked_from_any_start() {
        let selected = [
            editable("a1", &["uat", "load_test"]),
            editable("a2", &["uat"]),
        ];
        let mut session =
            EditSession::open(&selected, &universe(&["uat", "load_test", "gpu"])).unwrap();

        for label in ["uat", "load_test", "gpu"] {
            assert!(drive(&mut session, label, false).unwrap());
            assert_eq!(session.state(label).unwrap().value, ToggleValue::Off);
        }
    }

    #[test]
    fn drive_reports_locked_labels() {
        let selected = [Agent::new(
            "a1",
            vec![Membership::new("prod", Origin::External)],
        )];
        let mut session = EditSession::open(&selected, &universe(&["prod"])).unwrap();
        assert!(!drive(&mut session, "prod", false).unwrap());
        assert_eq!(session.state("prod").unwrap().value, ToggleValue::On);
    }

    #[test]
    fn drive_rejects_unknown_labels() {
        let selected = [editable("a1", &[])];
        let mut session = EditSession::open(&selected, &universe(&[])).unwrap();
        let err = drive(&mut session, "ghost", true).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
