use serde::{Deserialize, Serialize};
use thiserror::Error;

use muster_core::{Agent, MembershipIndex, SelectionError, TriState};

use crate::ledger::SelectionLedger;
use crate::planner::Plan;
use crate::quick_add::QuickAddRegistry;

/// Rejection from the apply collaborator, surfaced to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApplyError {
    pub message: String,
}

impl ApplyError {
    pub fn new(message: impl Into<String>) -> Self {
        ApplyError {
            message: message.into(),
        }
    }
}

/// Success summary from the apply collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub message: String,
}

impl ApplyOutcome {
    /// Standard summary for an applied bulk edit.
    pub fn updated(agent_count: usize) -> Self {
        ApplyOutcome {
            message: format!("updated {agent_count} agent(s)"),
        }
    }
}

/// Applies a committed plan to the agents selected when the session opened.
///
/// Transport, retries, and optimistic-concurrency tokens all live behind
/// this seam, outside the engine.
pub trait PlanApplier {
    fn apply_plan(
        &mut self,
        agent_ids: &[String],
        plan: &Plan,
    ) -> Result<ApplyOutcome, ApplyError>;
}

/// A committed edit: the plan plus the agent ids it is scoped to.
///
/// The id set is the one snapshotted when the session opened, passed through
/// unchanged — never re-derived at commit time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitRequest {
    pub agent_ids: Vec<String>,
    pub plan: Plan,
}

/// One bulk-edit session over a fixed selection of agents.
///
/// Constructed fresh per panel open and dropped on close; no module-level
/// state is shared between sessions. The selection's memberships are a
/// point-in-time snapshot — detecting concurrent external changes is the
/// transport layer's concern.
#[derive(Debug)]
pub struct EditSession {
    agent_ids: Vec<String>,
    ledger: SelectionLedger,
    quick_add: QuickAddRegistry,
}

impl EditSession {
    /// Open a session over the selected agents and the known label universe.
    ///
    /// Fails if the selection is empty; the caller is expected to prevent
    /// that before opening the panel.
    pub fn open(selected: &[Agent], known_labels: &[String]) -> Result<Self, SelectionError> {
        let index = MembershipIndex::build(selected, known_labels)?;
        Ok(EditSession {
            agent_ids: selected.iter().map(|a| a.id.clone()).collect(),
            ledger: SelectionLedger::from_index(&index),
            quick_add: QuickAddRegistry::default(),
        })
    }

    /// Current toggle states, ordered by label, for rendering.
    pub fn states(&self) -> impl Iterator<Item = (&str, &TriState)> + '_ {
        self.ledger.entries()
    }

    pub fn state(&self, label: &str) -> Option<&TriState> {
        self.ledger.state(label)
    }

    /// Apply one user click.
    pub fn click(&mut self, label: &str) {
        self.ledger.click(label);
    }

    /// Introduce a label by name, seeding it checked. Returns whether the
    /// ledger changed.
    pub fn quick_add(&mut self, text: &str) -> bool {
        self.quick_add.add_new(&mut self.ledger, text)
    }

    /// Labels introduced through quick add this session.
    pub fn quick_added(&self) -> &[String] {
        self.quick_add.added()
    }

    /// The agent ids this session is scoped to.
    pub fn agent_ids(&self) -> &[String] {
        &self.agent_ids
    }

    /// Compute the commit for the caller to submit.
    ///
    /// Does not consume or mutate the session, so a failed apply can be
    /// retried with an identical commit.
    pub fn commit(&self) -> SubmitRequest {
        SubmitRequest {
            agent_ids: self.agent_ids.clone(),
            plan: Plan::reconcile(&self.ledger),
        }
    }

    /// Commit and hand the plan to the apply collaborator, exactly once.
    ///
    /// No retry here; on failure the collaborator's message is surfaced
    /// verbatim, the ledger is untouched, and the session remains open.
    pub fn submit(&self, applier: &mut dyn PlanApplier) -> Result<ApplyOutcome, ApplyError> {
        let request = self.commit();
        applier.apply_plan(&request.agent_ids, &request.plan)
    }

    /// Close the session without committing. Nothing is applied.
    pub fn discard(self) {}
}
