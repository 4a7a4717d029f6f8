//! Projection of a finished session into the printed prescription.

use serde::Serialize;
use ts_rs::TS;

use wilkins_core::catalog::PATTERN_SYMPTOMS;
use wilkins_core::color::{self, Foreground, HexColor, lightness};
use wilkins_core::models::patient::Patient;
use wilkins_core::models::reading::ReadingSamples;

use crate::outcome::{ImprovementTier, Outcome};
use crate::pattern_glare::PatternGlareReport;
use crate::symptoms::SymptomScore;
use crate::wizard::WizardState;

/// Baseline readings further apart than this reduce measurement precision.
pub const BASELINE_VARIABILITY_WPM: u32 = 15;

pub const PLACEHOLDER: &str = "—";

pub const OVERLAY_CAVEAT: &str = "The color chosen in this protocol (using text as the stimulus) \
corresponds to overlay screening, not to the definitive lens prescription. The ideal chromaticity \
for overlays differs significantly from the ideal for precision lenses. Determine the lens color \
with the Intuitive Colorimeter and confirm it with trial lenses before the definitive \
prescription. Use the HEX code only as an initial reference for the laboratory, subject to \
adjustment after formal colorimetry.";

pub const PATIENT_GUIDANCE: &str = "Wear the lenses regularly for reading and screen use. The \
tint may need adjusting in 3 to 6 months as the patient adapts; children tend towards \
progressively lighter saturations over time. Reassess if the main complaint changes or the \
symptoms return. Give the laboratory the exact HEX code and saturation for accurate tinting.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PrescriptionLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum PrescriptionWarning {
    /// The two baseline readings differ by more than the allowed spread.
    BaselineVariability { difference: u32 },
    /// The control grating drew enough reports to question the result.
    ControlGratingResponse { count: usize },
}

impl PrescriptionWarning {
    pub fn message(&self) -> String {
        match self {
            PrescriptionWarning::BaselineVariability { difference } => format!(
                "Difference of {difference} wpm between the baseline readings: variability above \
                 {BASELINE_VARIABILITY_WPM} wpm may reduce precision."
            ),
            PrescriptionWarning::ControlGratingResponse { count } => format!(
                "Increased response on the control grating ({count} symptoms): interpret the \
                 results with caution."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrescribedColor {
    pub family: &'static str,
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub hex: HexColor,
    pub saturation_label: &'static str,
    /// Background of the result banner and the text color legible on it.
    pub banner: HexColor,
    pub banner_text: Foreground,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prescription {
    pub patient: Patient,
    pub date: String,
    pub color: Option<PrescribedColor>,
    pub symptom_score: SymptomScore,
    pub pattern_glare: PatternGlareReport,
    pub baseline: ReadingSamples,
    pub tinted: ReadingSamples,
    pub outcome: Outcome,
    pub tier: ImprovementTier,
    pub significance: Option<String>,
    pub lines: Vec<PrescriptionLine>,
    pub warnings: Vec<PrescriptionWarning>,
}

impl Prescription {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings
            .iter()
            .map(PrescriptionWarning::message)
            .collect()
    }
}

fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn readings_line(samples: &ReadingSamples, mean: Option<u32>) -> String {
    format!(
        "{} · {} wpm (mean: {})",
        or_placeholder(samples.get(0)),
        or_placeholder(samples.get(1)),
        or_placeholder(mean),
    )
}

fn line(label: &str, value: String) -> PrescriptionLine {
    PrescriptionLine {
        label: label.to_string(),
        value,
    }
}

pub fn assemble(state: &WizardState) -> Prescription {
    let color = state.selection.family.and_then(|family| {
        let level = state.selection.saturation.level();
        let fam = family.family();
        let banner = state.selection.tint(lightness::RESULT_HERO)?;
        Some(PrescribedColor {
            family: fam.name,
            hue: fam.hue,
            saturation: level.value,
            lightness: lightness::PRESCRIBED as u8,
            hex: state.selection.tint(lightness::PRESCRIBED)?,
            saturation_label: level.label,
            banner_text: color::contrast_color(&banner),
            banner,
        })
    });

    let symptom_score = state.symptom_score();
    let pattern_glare = state.pattern_glare_report();
    let outcome = state.outcome();
    let mid = pattern_glare.mid.count;
    let positive = pattern_glare.is_positive();

    let improvement = outcome.improvement.map_or_else(
        || PLACEHOLDER.to_string(),
        |i| {
            let significant = i.is_significant();
            let flag = if significant { " ✓ significant" } else { "" };
            format!("{:+}% / {:+} wpm{flag}", i.percent, i.absolute)
        },
    );

    let lines = vec![
        line("Patient", {
            let name = state.patient.name.trim();
            if name.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                name.to_string()
            }
        }),
        line(
            "Age",
            state
                .patient
                .age
                .map_or_else(|| PLACEHOLDER.to_string(), |a| format!("{a} years")),
        ),
        line(
            "Date",
            state.evaluation_date.strftime("%d/%m/%Y").to_string(),
        ),
        line(
            "Color family",
            or_placeholder(color.as_ref().map(|c| c.family)),
        ),
        line(
            "Hue",
            or_placeholder(color.as_ref().map(|c| format!("{}°", c.hue))),
        ),
        line(
            "Saturation",
            or_placeholder(color.as_ref().map(|c| format!("{}%", c.saturation))),
        ),
        line(
            "HEX code (reference)",
            or_placeholder(color.as_ref().map(|c| c.hex.to_uppercase())),
        ),
        line(
            "Symptom score",
            format!("{} / {}", symptom_score.score, symptom_score.max_score),
        ),
        line(
            "Pattern glare (mid frequency)",
            format!(
                "{mid} symptom{} / {}{}",
                plural(mid),
                PATTERN_SYMPTOMS.len(),
                positive.then_some(" (positive)").unwrap_or_default(),
            ),
        ),
        line(
            "Readings without filter",
            readings_line(&state.baseline, outcome.baseline_mean),
        ),
        line(
            "Readings with filter",
            readings_line(&state.tinted, outcome.tinted_mean),
        ),
        line("Objective improvement", improvement),
        line(
            "Lens type",
            format!(
                "Precision Tinted Lens ({})",
                state.selection.saturation.level().label
            ),
        ),
    ];

    let mut warnings = Vec::new();
    if let (Some(first), Some(second)) = (state.baseline.get(0), state.baseline.get(1)) {
        let difference = first.abs_diff(second);
        if difference > BASELINE_VARIABILITY_WPM {
            warnings.push(PrescriptionWarning::BaselineVariability { difference });
        }
    }
    if pattern_glare.suggestibility {
        warnings.push(PrescriptionWarning::ControlGratingResponse {
            count: pattern_glare.low.count,
        });
    }

    Prescription {
        patient: state.patient.clone(),
        date: state.evaluation_date.strftime("%d/%m/%Y").to_string(),
        color,
        symptom_score,
        pattern_glare,
        baseline: state.baseline.clone(),
        tinted: state.tinted.clone(),
        tier: outcome.tier(),
        significance: outcome
            .improvement
            .and_then(|i| i.reason())
            .map(|r| r.label()),
        outcome,
        lines,
        warnings,
    }
}
