use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identification and main complaint collected on the patient screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub name: String,
    pub age: Option<u32>,
    /// Main complaint and history (headaches, reading difficulty, prior diagnoses).
    pub complaint: String,
}

impl Patient {
    /// The only required field: a name with at least one visible character.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
