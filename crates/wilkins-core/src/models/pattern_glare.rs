use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{self, GratingId};
use crate::error::CoreError;

/// Checklist of symptoms the patient reported while viewing each grating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGlareResponses {
    checked: BTreeMap<GratingId, BTreeSet<String>>,
}

impl PatternGlareResponses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        grating: GratingId,
        symptom_id: &str,
        checked: bool,
    ) -> Result<(), CoreError> {
        let symptom = catalog::find_pattern_symptom(symptom_id)
            .ok_or_else(|| CoreError::UnknownPatternSymptom(symptom_id.to_string()))?;
        let entry = self.checked.entry(grating).or_default();
        if checked {
            entry.insert(symptom.id.to_string());
        } else {
            entry.remove(symptom.id);
        }
        Ok(())
    }

    pub fn is_checked(&self, grating: GratingId, symptom_id: &str) -> bool {
        self.checked
            .get(&grating)
            .is_some_and(|set| set.contains(symptom_id))
    }

    /// Number of checklist items reported for one grating.
    pub fn count(&self, grating: GratingId) -> usize {
        self.checked.get(&grating).map_or(0, BTreeSet::len)
    }

    pub fn any_checked(&self) -> bool {
        self.checked.values().any(|set| !set.is_empty())
    }
}
