//! Symptom questionnaire scoring and color family suggestions.

use std::collections::BTreeMap;

use serde::Serialize;

use wilkins_core::catalog::{SYMPTOMS, SymptomCategory};
use wilkins_core::models::selection::FamilyIndex;
use wilkins_core::models::symptoms::{Severity, SymptomResponses};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SymptomScore {
    pub score: u32,
    pub max_score: u32,
}

impl SymptomScore {
    /// Fraction of the maximum, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }

    pub fn band(&self) -> SeverityBand {
        let ratio = self.ratio();
        if ratio < 0.2 {
            SeverityBand::Mild
        } else if ratio < 0.5 {
            SeverityBand::Moderate
        } else {
            SeverityBand::Severe
        }
    }

    pub fn tone(&self) -> ScoreTone {
        let ratio = self.ratio();
        if ratio < 0.3 {
            ScoreTone::Low
        } else if ratio < 0.6 {
            ScoreTone::Elevated
        } else {
            ScoreTone::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    pub fn description(self) -> &'static str {
        match self {
            SeverityBand::Mild => "Mild symptoms: a filter may not be needed",
            SeverityBand::Moderate => "Moderate symptoms: screening indicated",
            SeverityBand::Severe => "Severe symptoms: high likelihood of benefit from a filter",
        }
    }
}

/// Color of the score bar. Uses its own cut-offs, distinct from the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTone {
    Low,
    Elevated,
    High,
}

pub fn score(responses: &SymptomResponses) -> SymptomScore {
    let score = SYMPTOMS
        .iter()
        .map(|s| u32::from(responses.get(s.id).value()))
        .sum();
    SymptomScore {
        score,
        max_score: SYMPTOMS.len() as u32 * u32::from(Severity::MAX),
    }
}

pub fn category_totals(responses: &SymptomResponses) -> BTreeMap<SymptomCategory, u32> {
    let mut totals = BTreeMap::new();
    for symptom in &SYMPTOMS {
        let value = u32::from(responses.get(symptom.id).value());
        *totals.entry(symptom.category).or_insert(0) += value;
    }
    totals
}

/// Category total that must be exceeded, and the families it suggests.
const SUGGESTION_RULES: [(SymptomCategory, u32, [usize; 2]); 5] = [
    (SymptomCategory::Light, 4, [1, 2]),
    (SymptomCategory::Visual, 6, [4, 5]),
    (SymptomCategory::Pain, 4, [0, 8]),
    (SymptomCategory::Pattern, 4, [7, 0]),
    (SymptomCategory::Function, 6, [3, 4]),
];

/// Families suggested by the answers, in first-suggested order without
/// duplicates.
pub fn suggested_families(responses: &SymptomResponses) -> Vec<FamilyIndex> {
    let totals = category_totals(responses);
    let mut suggested: Vec<FamilyIndex> = Vec::new();

    for (category, threshold, families) in SUGGESTION_RULES {
        if totals.get(&category).copied().unwrap_or(0) <= threshold {
            continue;
        }
        for family in families.into_iter().filter_map(|i| FamilyIndex::new(i).ok()) {
            if !suggested.contains(&family) {
                suggested.push(family);
            }
        }
    }
    suggested
}
