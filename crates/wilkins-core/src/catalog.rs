//! Fixed clinical reference tables used throughout the protocol.
//!
//! These are collaborator input, not computed: the symptom scale, the color
//! families of the colorimeter, the saturation steps, the pattern glare
//! stimuli and the rate-of-reading word corpus.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A hue category offered as a candidate filter color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorFamily {
    pub name: &'static str,
    /// Hue in degrees, 0–360.
    pub hue: u16,
    pub description: &'static str,
}

pub const COLOR_FAMILIES: [ColorFamily; 9] = [
    family("Violet", 270, "Migraine, intense photophobia"),
    family("Blue", 220, "Text distortions, fatigue"),
    family("Cyan", 185, "Sensitivity to fluorescent light"),
    family("Green", 140, "Irlen syndrome, dyslexia"),
    family("Yellow-green", 80, "Contrast and reading speed"),
    family("Yellow", 50, "Tracking difficulty"),
    family("Orange", 30, "Headache from visual effort"),
    family("Red", 0, "Sensitivity to striped patterns"),
    family("Rose", 330, "Visual distortion and instability"),
];

const fn family(name: &'static str, hue: u16, description: &'static str) -> ColorFamily {
    ColorFamily {
        name,
        hue,
        description,
    }
}

/// Intensity of the chromatic filter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SaturationLevel {
    pub label: &'static str,
    /// Saturation percentage, 0–100.
    pub value: u8,
    pub description: &'static str,
}

pub const SATURATION_LEVELS: [SaturationLevel; 5] = [
    SaturationLevel {
        label: "Very low",
        value: 15,
        description: "Almost neutral",
    },
    SaturationLevel {
        label: "Low",
        value: 30,
        description: "Light tint",
    },
    SaturationLevel {
        label: "Moderate",
        value: 50,
        description: "General use",
    },
    SaturationLevel {
        label: "High",
        value: 70,
        description: "Heightened sensitivity",
    },
    SaturationLevel {
        label: "Very high",
        value: 90,
        description: "Severe photophobia",
    },
];

/// Index into [`SATURATION_LEVELS`] selected before the clinician adjusts it.
pub const DEFAULT_SATURATION: usize = 2;

/// Grouping used to derive color family suggestions from symptom answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    Visual,
    Pain,
    Light,
    Pattern,
    Function,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub text: &'static str,
    pub category: SymptomCategory,
}

pub const SYMPTOMS: [Symptom; 12] = [
    Symptom {
        id: "words_move",
        text: "Words seem to move or shimmer while reading",
        category: SymptomCategory::Visual,
    },
    Symptom {
        id: "letters_blur",
        text: "Letters blur or go out of focus while reading",
        category: SymptomCategory::Visual,
    },
    Symptom {
        id: "halos",
        text: "Sees halos or excessive glare around letters",
        category: SymptomCategory::Visual,
    },
    Symptom {
        id: "lines_merge",
        text: "Lines of text seem to merge or jump",
        category: SymptomCategory::Visual,
    },
    Symptom {
        id: "headache_reading",
        text: "Headache when reading or using screens",
        category: SymptomCategory::Pain,
    },
    Symptom {
        id: "eye_pain",
        text: "Eye pain or burning while reading",
        category: SymptomCategory::Pain,
    },
    Symptom {
        id: "light_sensitivity",
        text: "Sensitivity to light (photophobia)",
        category: SymptomCategory::Light,
    },
    Symptom {
        id: "fluorescent",
        text: "Discomfort under fluorescent or LED lighting",
        category: SymptomCategory::Light,
    },
    Symptom {
        id: "striped_patterns",
        text: "Discomfort looking at striped or checked patterns",
        category: SymptomCategory::Pattern,
    },
    Symptom {
        id: "slow_reading",
        text: "Slow reading or needs to re-read passages",
        category: SymptomCategory::Function,
    },
    Symptom {
        id: "lose_place",
        text: "Loses their place on the line while reading",
        category: SymptomCategory::Function,
    },
    Symptom {
        id: "concentration",
        text: "Difficulty concentrating on text for more than 10 min",
        category: SymptomCategory::Function,
    },
];

pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|s| s.id == id)
}

/// Frequency labels for severities 0 through 4.
pub const SEVERITY_LABELS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];

/// Opening question asked before the symptom scale, phrased so it does not
/// suggest an answer.
pub const SCREENING_QUESTION: &str =
    "After you have been reading for a while, do the words or letters do anything different?";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternSymptom {
    pub id: &'static str,
    pub text: &'static str,
}

pub const PATTERN_SYMPTOMS: [PatternSymptom; 7] = [
    PatternSymptom {
        id: "ps_blur",
        text: "Blurring of the stripes",
    },
    PatternSymptom {
        id: "ps_color",
        text: "False colors at the stripe edges",
    },
    PatternSymptom {
        id: "ps_move",
        text: "Stripes seem to move or vibrate",
    },
    PatternSymptom {
        id: "ps_3d",
        text: "3D effect or illusory depth",
    },
    PatternSymptom {
        id: "ps_disappear",
        text: "Stripes fade or cluster together",
    },
    PatternSymptom {
        id: "ps_headache",
        text: "Headache or eye discomfort",
    },
    PatternSymptom {
        id: "ps_nausea",
        text: "Nausea or dizziness",
    },
];

pub fn find_pattern_symptom(id: &str) -> Option<&'static PatternSymptom> {
    PATTERN_SYMPTOMS.iter().find(|s| s.id == id)
}

/// Spatial frequency of a striped grating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GratingId {
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Grating {
    pub id: GratingId,
    pub label: &'static str,
    pub cycles: &'static str,
    /// Full black+white period in pixels.
    pub stripe_width: u16,
    pub description: &'static str,
    /// Whether reports on this grating feed the diagnostic decision.
    pub clinically_scored: bool,
}

pub const GRATINGS: [Grating; 3] = [
    Grating {
        id: GratingId::Low,
        label: "Low frequency",
        cycles: "~1 cycle/degree",
        stripe_width: 48,
        description: "Wide stripes, control grating (rarely provokes symptoms)",
        clinically_scored: true,
    },
    Grating {
        id: GratingId::Mid,
        label: "Mid frequency",
        cycles: "~3 cycles/degree",
        stripe_width: 16,
        description: "Medium stripes, peak cortical sensitivity and diagnostic criterion",
        clinically_scored: true,
    },
    Grating {
        id: GratingId::High,
        label: "High frequency",
        cycles: "~12 cycles/degree",
        stripe_width: 4,
        description: "Fine stripes, not recommended as a diagnostic criterion",
        clinically_scored: false,
    },
];

pub fn grating(id: GratingId) -> &'static Grating {
    match id {
        GratingId::Low => &GRATINGS[0],
        GratingId::Mid => &GRATINGS[1],
        GratingId::High => &GRATINGS[2],
    }
}

/// Portuguese high-frequency monosyllables of the rate-of-reading test,
/// presented without predictable context.
pub const READING_WORDS: [&str; 40] = [
    "o", "a", "e", "em", "um", "ao", "eu", "já", "lá", "faz", "vez", "voz", "luz", "paz", "foi",
    "vai", "vem", "tem", "bem", "sem", "com", "por", "que", "não", "mas", "ou", "seu", "meu", "lei",
    "pé", "só", "céu", "mão", "pão", "bom", "sol", "mar", "sal", "mel", "flor",
];

/// One step of the protocol as listed on the intro screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProtocolStage {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROTOCOL_OVERVIEW: [ProtocolStage; 8] = [
    ProtocolStage {
        title: "Patient details",
        description: "Identification and main complaint",
    },
    ProtocolStage {
        title: "Symptom questionnaire",
        description: "Quantification on the visual sensitivity scale",
    },
    ProtocolStage {
        title: "Pattern glare test",
        description: "Striped gratings at 3 spatial frequencies",
    },
    ProtocolStage {
        title: "Baseline reading test",
        description: "2 readings without a filter, mean in words/min",
    },
    ProtocolStage {
        title: "Color family selection",
        description: "Identify the best chromatic hue",
    },
    ProtocolStage {
        title: "Saturation adjustment",
        description: "Calibrate filter intensity",
    },
    ProtocolStage {
        title: "Validation with filter",
        description: "2 readings with the filter, objective improvement check",
    },
    ProtocolStage {
        title: "Prescription",
        description: "Report with specifications for the optical laboratory",
    },
];
