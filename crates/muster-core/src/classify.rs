//! Origin classification for the two label kinds the engine is configured
//! with. Environments carry provenance from the entity source; resources do
//! not. Both feed the same aggregation and session flow.

use serde::{Deserialize, Serialize};

use crate::membership::Origin;

/// What the entity source reports about where a membership reference came
/// from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Local,
    ConfigRepo,
    Unknown,
}

/// Classify an environment reference into an editing origin.
///
/// `defined` is whether the environment exists in the label universe.
/// Config-repo sourcing wins over everything else; a reference the universe
/// does not define is unresolved even when locally sourced.
pub fn classify_environment(kind: SourceKind, defined: bool) -> Origin {
    match kind {
        SourceKind::ConfigRepo => Origin::External,
        _ if !defined => Origin::Unresolved,
        SourceKind::Unknown => Origin::Unresolved,
        SourceKind::Local => Origin::Editable,
    }
}

/// Resources carry no provenance and are always locally editable.
pub fn classify_resource() -> Origin {
    Origin::Editable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_repo_is_external_even_when_undefined() {
        assert_eq!(
            classify_environment(SourceKind::ConfigRepo, false),
            Origin::External
        );
        assert_eq!(
            classify_environment(SourceKind::ConfigRepo, true),
            Origin::External
        );
    }

    #[test]
    fn local_defined_is_editable() {
        assert_eq!(
            classify_environment(SourceKind::Local, true),
            Origin::Editable
        );
    }

    #[test]
    fn local_undefined_is_unresolved() {
        assert_eq!(
            classify_environment(SourceKind::Local, false),
            Origin::Unresolved
        );
    }

    #[test]
    fn unknown_source_is_unresolved_regardless() {
        assert_eq!(
            classify_environment(SourceKind::Unknown, true),
            Origin::Unresolved
        );
        assert_eq!(
            classify_environment(SourceKind::Unknown, false),
            Origin::Unresolved
        );
    }

    #[test]
    fn resources_are_always_editable() {
        assert_eq!(classify_resource(), Origin::Editable);
    }

    #[test]
    fn source_kind_wire_names() {
        assert_eq!(serde_json::to_string(&SourceKind::Local).unwrap(), "\"local\"");
        assert_eq!(
            serde_json::to_string(&SourceKind::ConfigRepo).unwrap(),
            "\"config_repo\""
        );
        let parsed: SourceKind = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, SourceKind::Unknown);
    }
}
