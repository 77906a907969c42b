use serde::{Deserialize, Serialize};

/// Provenance of one membership record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Freely added and removed by the editing engine.
    Editable,
    /// Contributed by a config repository. Counts toward aggregation but is
    /// never added or removed here.
    External,
    /// Referenced by the agent's record but not defined in the editable
    /// configuration.
    Unresolved,
}

/// One label an agent currently holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
    pub label: String,
    pub origin: Origin,
}

impl Membership {
    pub fn new(label: impl Into<String>, origin: Origin) -> Self {
        Membership {
            label: label.into(),
            origin,
        }
    }
}

/// An agent and the memberships it currently holds.
///
/// Read-only input to the engine; only the apply collaborator updates the
/// authoritative records after a successful commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl Agent {
    pub fn new(id: impl Into<String>, memberships: Vec<Membership>) -> Self {
        Agent {
            id: id.into(),
            memberships,
        }
    }

    /// Whether this agent holds `label` through any origin.
    pub fn holds(&self, label: &str) -> bool {
        self.memberships.iter().any(|m| m.label == label)
    }

    /// Whether this agent holds `label` through the given origin.
    pub fn holds_via(&self, label: &str, origin: Origin) -> bool {
        self.memberships
            .iter()
            .any(|m| m.label == label && m.origin == origin)
    }
}
