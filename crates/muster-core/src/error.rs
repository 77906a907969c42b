use thiserror::Error;

/// Errors raised when constructing a bulk-edit selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A session was opened with zero selected agents. Callers must prevent
    /// this; the engine refuses to aggregate an empty selection.
    #[error("cannot aggregate memberships for an empty selection")]
    EmptySelection,
}
