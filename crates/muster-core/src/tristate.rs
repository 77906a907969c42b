use serde::{Deserialize, Serialize};

/// Advisory texts attached to locked toggles.
pub mod advisory {
    pub const EXTERNAL: &str = "associated via external source";
    pub const UNRESOLVED: &str = "undefined in editable configuration";
}

/// Display/edit value of one label within a bulk-edit session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToggleValue {
    On,
    Off,
    Mixed,
}

/// A three-valued toggle cell.
///
/// `Mixed` is only ever a derived initial value; a user never selects it.
/// Clicking a mixed cell forces it to `On` (a mixed state resolves toward
/// full application first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriState {
    pub value: ToggleValue,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub advisory: String,
}

impl TriState {
    pub fn unlocked(value: ToggleValue) -> Self {
        TriState {
            value,
            locked: false,
            advisory: String::new(),
        }
    }

    pub fn locked(value: ToggleValue, advisory: &str) -> Self {
        TriState {
            value,
            locked: true,
            advisory: advisory.to_string(),
        }
    }

    /// Next state after a click. Locked cells never change.
    pub fn toggled(&self) -> TriState {
        if self.locked {
            return self.clone();
        }
        let value = match self.value {
            ToggleValue::On => ToggleValue::Off,
            ToggleValue::Off | ToggleValue::Mixed => ToggleValue::On,
        };
        TriState {
            value,
            ..self.clone()
        }
    }

    pub fn is_checked(&self) -> bool {
        self.value == ToggleValue::On
    }

    pub fn is_unchecked(&self) -> bool {
        self.value == ToggleValue::Off
    }
}
