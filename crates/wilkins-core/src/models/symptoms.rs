use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, SEVERITY_LABELS};
use crate::error::CoreError;

/// How often a symptom occurs, 0 (never) to 4 (always).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(as = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::SeverityOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        SEVERITY_LABELS[usize::from(self.0)]
    }
}

impl TryFrom<u8> for Severity {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

/// Answers to the symptom questionnaire, keyed by catalog symptom id.
/// Unanswered symptoms count as severity 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomResponses {
    answers: BTreeMap<String, Severity>,
}

impl SymptomResponses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, symptom_id: &str, severity: Severity) -> Result<(), CoreError> {
        let symptom = catalog::find_symptom(symptom_id)
            .ok_or_else(|| CoreError::UnknownSymptom(symptom_id.to_string()))?;
        self.answers.insert(symptom.id.to_string(), severity);
        Ok(())
    }

    pub fn get(&self, symptom_id: &str) -> Severity {
        self.answers.get(symptom_id).copied().unwrap_or_default()
    }

    pub fn is_answered(&self, symptom_id: &str) -> bool {
        self.answers.contains_key(symptom_id)
    }
}
