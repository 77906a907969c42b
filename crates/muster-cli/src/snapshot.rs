use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use muster_core::{classify_environment, classify_resource, Agent, Membership, SourceKind};

/// Which label kind a command operates on. Environments and resources are
/// two configurations of the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelKind {
    Environments,
    Resources,
}

/// On-disk agents snapshot: the label universe plus each agent's current
/// memberships, as exported by the surrounding application.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub environments: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub agents: Vec<AgentRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    #[serde(default)]
    pub environments: Vec<EnvironmentRef>,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// One environment reference with the source the application reported.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnvironmentRef {
    pub name: String,
    #[serde(default)]
    pub source: SourceKind,
}

impl Snapshot {
    pub fn load(path: &Path) -> anyhow::Result<Snapshot> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing snapshot {}", path.display()))
    }

    /// The label universe for a kind.
    pub fn universe(&self, kind: LabelKind) -> &[String] {
        match kind {
            LabelKind::Environments => &self.environments,
            LabelKind::Resources => &self.resources,
        }
    }

    /// Resolve selected agent ids, in the order given. An id the snapshot
    /// does not contain is an error.
    pub fn select(&self, kind: LabelKind, ids: &[String]) -> anyhow::Result<Vec<Agent>> {
        ids.iter()
            .map(|id| {
                let record = self
                    .agents
                    .iter()
                    .find(|a| a.id == *id)
                    .ok_or_else(|| anyhow::anyhow!("no agent with id \"{id}\" in snapshot"))?;
                Ok(self.to_agent(record, kind))
            })
            .collect()
    }

    fn to_agent(&self, record: &AgentRecord, kind: LabelKind) -> Agent {
        let memberships: Vec<Membership> = match kind {
            LabelKind::Environments => record
                .environments
                .iter()
                .map(|env| {
                    let defined = self.environments.contains(&env.name);
                    Membership::new(env.name.clone(), classify_environment(env.source, defined))
                })
                .collect(),
            LabelKind::Resources => record
                .resources
                .iter()
                .map(|name| Membership::new(name.clone(), classify_resource()))
                .collect(),
        };
        Agent::new(record.id.clone(), memberships)
    }
}
