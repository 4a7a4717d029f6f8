//! wilkins-protocol
//!
//! The Wilkins colorimetry protocol as pure logic: questionnaire instrument
//! definitions, scoring and interpretation rules, the reading-test timer, the
//! prescription projection, and the wizard reducer that ties them together.
//! No I/O and no scheduling; hosts drive it by dispatching actions.

pub mod error;
pub mod instruments;
pub mod outcome;
pub mod pattern_glare;
pub mod prescription;
pub mod reading;
pub mod scoring;
pub mod symptoms;
pub mod wizard;

use error::ProtocolError;
use scoring::{Domain, ScoreEntry, ValidationError};
use wizard::WizardState;

/// Trait implemented by each questionnaire administered during the protocol.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "vss", "pgt").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The domains and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// The answers recorded for this instrument during a session.
    fn recorded_entries(&self, state: &WizardState) -> Vec<ScoreEntry>;

    /// Highest attainable total across all items.
    fn max_total(&self) -> f64 {
        self.domains()
            .iter()
            .flat_map(|d| &d.items)
            .map(|i| i.range.max)
            .sum()
    }

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_items: Vec<_> = self.domains().iter().flat_map(|d| &d.items).collect();

        let mut errors = Vec::new();
        for entry in scores {
            match all_items.iter().find(|i| i.id == entry.item_id) {
                Some(item) if !item.range.contains(entry.value) => {
                    errors.push(ValidationError {
                        item_id: entry.item_id.clone(),
                        value: entry.value,
                        expected_range: Some(item.range),
                        score_type: Some(item.score_type),
                        message: format!(
                            "{}: {} score {} is outside range [{}, {}]",
                            self.name(),
                            item.text,
                            entry.value,
                            item.range.min,
                            item.range.max,
                        ),
                    });
                }
                Some(_) => {}
                None => errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: None,
                    score_type: None,
                    message: format!("{}: unknown item '{}'", self.name(), entry.item_id),
                }),
            }
        }
        errors
    }

    /// Format scores as structured text for the printed report.
    fn to_structured_input(&self, scores: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            output.push_str(&format!("### {}\n", domain.name));
            for item in &domain.items {
                if let Some(entry) = scores.iter().find(|e| e.item_id == item.id) {
                    output.push_str(&format!("- {}: {}\n", item.text, entry.value));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::vss::VisualSensitivityScale),
        Box::new(instruments::pgt::PatternGlareTest),
    ]
}

/// Structured summaries of every instrument's answers in `state`.
///
/// Recorded entries are re-validated first; the first invalid entry fails the
/// whole summary so nothing out of range reaches a printed report.
pub fn session_summaries(state: &WizardState) -> Result<Vec<String>, ProtocolError> {
    all_instruments()
        .iter()
        .map(|instrument| {
            let entries = instrument.recorded_entries(state);
            if let Some(error) = instrument.validate_scores(&entries).into_iter().next() {
                return Err(error.into());
            }
            Ok(instrument.to_structured_input(&entries))
        })
        .collect()
}
