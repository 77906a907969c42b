pub mod classify;
pub mod error;
pub mod index;
pub mod membership;
pub mod tristate;

pub use classify::{classify_environment, classify_resource, SourceKind};
pub use error::SelectionError;
pub use index::MembershipIndex;
pub use membership::{Agent, Membership, Origin};
pub use tristate::{ToggleValue, TriState};
