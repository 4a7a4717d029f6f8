use wilkins_core::catalog::{GRATINGS, GratingId, PATTERN_SYMPTOMS};
use wilkins_core::models::pattern_glare::PatternGlareResponses;

use crate::Instrument;
use crate::scoring::{Domain, Item, ScoreEntry, ScoreRange, ScoreType};
use crate::wizard::WizardState;

/// Pattern glare test: the same 7-item checklist asked for each of three
/// striped gratings. Item ids are `<grating>.<symptom>`, e.g. `mid.ps_blur`.
pub struct PatternGlareTest;

impl Instrument for PatternGlareTest {
    fn id(&self) -> &str {
        "pgt"
    }

    fn name(&self) -> &str {
        "Pattern Glare Test"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let checkbox = ScoreRange {
                min: 0.0,
                max: 1.0,
                step: Some(1.0),
            };

            GRATINGS
                .iter()
                .map(|g| Domain {
                    id: grating_key(g.id).to_string(),
                    name: format!("{} ({})", g.label, g.cycles),
                    items: PATTERN_SYMPTOMS
                        .iter()
                        .map(|s| Item {
                            id: item_id(g.id, s.id),
                            text: s.text.to_string(),
                            score_type: ScoreType::Checklist,
                            range: checkbox,
                        })
                        .collect(),
                    description: Some(g.description.to_string()),
                })
                .collect()
        });
        &DOMAINS
    }

    fn recorded_entries(&self, state: &WizardState) -> Vec<ScoreEntry> {
        entries(&state.pattern_glare)
    }
}

fn grating_key(id: GratingId) -> &'static str {
    match id {
        GratingId::Low => "low",
        GratingId::Mid => "mid",
        GratingId::High => "high",
    }
}

pub fn item_id(grating: GratingId, symptom_id: &str) -> String {
    format!("{}.{symptom_id}", grating_key(grating))
}

/// One entry per grating and checklist item, 1 when reported.
pub fn entries(responses: &PatternGlareResponses) -> Vec<ScoreEntry> {
    GRATINGS
        .iter()
        .flat_map(|g| {
            PATTERN_SYMPTOMS.iter().map(move |s| ScoreEntry {
                item_id: item_id(g.id, s.id),
                value: if responses.is_checked(g.id, s.id) {
                    1.0
                } else {
                    0.0
                },
            })
        })
        .collect()
}
