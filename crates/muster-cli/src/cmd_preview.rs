use std::path::Path;

use muster_core::ToggleValue;
use muster_session::EditSession;

use crate::snapshot::{LabelKind, Snapshot};

/// `muster preview --snapshot agents.json --select a1 --select a2`
pub fn execute(
    snapshot_path: &Path,
    select: &[String],
    kind: LabelKind,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(snapshot_path)?;
    let selected = snapshot.select(kind, select)?;
    let session = EditSession::open(&selected, snapshot.universe(kind))?;

    if json {
        let states: serde_json::Map<String, serde_json::Value> = session
            .states()
            .map(
                |(label, state)| -> anyhow::Result<(String, serde_json::Value)> {
                    Ok((label.to_string(), serde_json::to_value(state)?))
                },
            )
            .collect::<anyhow::Result<_>>()?;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(states))?
        );
        return Ok(());
    }

    if session.states().next().is_none() {
        println!("(no labels for this selection)");
        return Ok(());
    }
    for (label, state) in session.states() {
        let mark = match state.value {
            ToggleValue::On => "[x]",
            ToggleValue::Off => "[ ]",
            ToggleValue::Mixed => "[-]",
        };
        if state.locked {
            println!("{mark} {label}  (locked: {})", state.advisory);
        } else {
            println!("{mark} {label}");
        }
    }
    Ok(())
}
