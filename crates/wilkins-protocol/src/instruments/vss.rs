use wilkins_core::catalog::{SYMPTOMS, SymptomCategory};
use wilkins_core::models::symptoms::{Severity, SymptomResponses};

use crate::Instrument;
use crate::scoring::{Domain, Item, ScoreEntry, ScoreRange, ScoreType};
use crate::wizard::WizardState;

/// Visual sensitivity scale: 12 symptoms rated by frequency, 0 (never) to
/// 4 (always), grouped into the categories that drive color suggestions.
pub struct VisualSensitivityScale;

impl Instrument for VisualSensitivityScale {
    fn id(&self) -> &str {
        "vss"
    }

    fn name(&self) -> &str {
        "Visual Sensitivity Scale"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange {
                min: 0.0,
                max: f64::from(Severity::MAX),
                step: Some(1.0),
            };

            [
                (SymptomCategory::Visual, "visual", "Visual distortions"),
                (SymptomCategory::Pain, "pain", "Pain and discomfort"),
                (SymptomCategory::Light, "light", "Light sensitivity"),
                (SymptomCategory::Pattern, "pattern", "Pattern sensitivity"),
                (SymptomCategory::Function, "function", "Reading function"),
            ]
            .into_iter()
            .map(|(category, id, name)| Domain {
                id: id.to_string(),
                name: name.to_string(),
                items: SYMPTOMS
                    .iter()
                    .filter(|s| s.category == category)
                    .map(|s| Item {
                        id: s.id.to_string(),
                        text: s.text.to_string(),
                        score_type: ScoreType::Rating,
                        range: rating,
                    })
                    .collect(),
                description: None,
            })
            .collect()
        });
        &DOMAINS
    }

    fn recorded_entries(&self, state: &WizardState) -> Vec<ScoreEntry> {
        entries(&state.symptoms)
    }
}

/// One entry per catalog symptom, unanswered symptoms as 0.
pub fn entries(responses: &SymptomResponses) -> Vec<ScoreEntry> {
    SYMPTOMS
        .iter()
        .map(|s| ScoreEntry {
            item_id: s.id.to_string(),
            value: f64::from(responses.get(s.id).value()),
        })
        .collect()
}
