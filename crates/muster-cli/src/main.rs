mod cmd_plan;
mod cmd_preview;
mod snapshot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use snapshot::LabelKind;

#[derive(Parser)]
#[command(name = "muster", version, about = "Bulk label editing for agent fleets")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show aggregated toggle states for a selection of agents
    Preview {
        /// Path to the agents snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Agent id to include in the selection (repeatable)
        #[arg(long = "select", required = true)]
        select: Vec<String>,
        /// Label kind to edit
        #[arg(long, value_enum, default_value = "environments")]
        kind: LabelKind,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Drive labels to an end state and print the resulting plan
    Plan {
        /// Path to the agents snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Agent id to include in the selection (repeatable)
        #[arg(long = "select", required = true)]
        select: Vec<String>,
        /// Label kind to edit
        #[arg(long, value_enum, default_value = "environments")]
        kind: LabelKind,
        /// Label to drive to checked (repeatable)
        #[arg(long = "on")]
        on: Vec<String>,
        /// Label to drive to unchecked (repeatable)
        #[arg(long = "off")]
        off: Vec<String>,
        /// New label to introduce checked (repeatable)
        #[arg(long = "quick-add")]
        quick_add: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview {
            snapshot,
            select,
            kind,
            json,
        } => cmd_preview::execute(&snapshot, &select, kind, json),
        Command::Plan {
            snapshot,
            select,
            kind,
            on,
            off,
            quick_add,
            json,
        } => cmd_plan::execute(&cmd_plan::PlanParams {
            snapshot_path: &snapshot,
            select: &select,
            kind,
            on: &on,
            off: &off,
            quick_add: &quick_add,
            json,
        }),
    }
}
