pub mod ledger;
pub mod planner;
pub mod quick_add;
pub mod session;

pub use ledger::SelectionLedger;
pub use planner::Plan;
pub use quick_add::QuickAddRegistry;
pub use session::{ApplyError, ApplyOutcome, EditSession, PlanApplier, SubmitRequest};
