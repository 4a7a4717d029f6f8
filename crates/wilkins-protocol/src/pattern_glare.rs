//! Interpretation of the pattern glare checklist.
//!
//! Policy: the control (low frequency) grating screens for suggestibility,
//! the mid frequency grating is the diagnostic criterion, and the high
//! frequency grating is recorded but never used for the decision.

use serde::Serialize;

use wilkins_core::catalog::{GratingId, PATTERN_SYMPTOMS};
use wilkins_core::models::pattern_glare::PatternGlareResponses;

/// Control-grating count above which suggestibility is flagged.
pub const CONTROL_THRESHOLD: usize = 2;

/// Mid-frequency count above which the test is positive.
pub const DIAGNOSTIC_THRESHOLD: usize = 3;

/// Per-grating label shown next to its score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GratingSignal {
    Normal,
    Mild,
    /// Control grating above its threshold.
    Attention,
    /// Diagnostic grating above its threshold.
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GratingResult {
    pub grating: GratingId,
    pub count: usize,
    /// Share of the checklist reported, rounded to whole percent.
    pub percent: u32,
    pub signal: GratingSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternGlareVerdict {
    Positive,
    Borderline,
    Normal,
}

impl PatternGlareVerdict {
    pub fn description(self) -> &'static str {
        match self {
            PatternGlareVerdict::Positive => {
                "Pattern glare positive: strong indication for a chromatic filter"
            }
            PatternGlareVerdict::Borderline => {
                "Increased sensitivity to the mid frequency: screening indicated"
            }
            PatternGlareVerdict::Normal => "No significant pattern of visual sensitivity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Normal,
    Reduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternGlareReport {
    pub low: GratingResult,
    pub mid: GratingResult,
    /// Recorded for completeness only.
    pub high_count: usize,
    pub verdict: PatternGlareVerdict,
    /// Control grating drew more reports than it plausibly should.
    pub suggestibility: bool,
}

impl PatternGlareReport {
    pub fn confidence(&self) -> Confidence {
        if self.suggestibility {
            Confidence::Reduced
        } else {
            Confidence::Normal
        }
    }

    pub fn is_positive(&self) -> bool {
        self.verdict == PatternGlareVerdict::Positive
    }
}

fn grating_result(grating: GratingId, count: usize) -> GratingResult {
    let threshold = match grating {
        GratingId::Low => CONTROL_THRESHOLD,
        _ => DIAGNOSTIC_THRESHOLD,
    };
    let signal = if count > threshold {
        match grating {
            GratingId::Low => GratingSignal::Attention,
            _ => GratingSignal::Positive,
        }
    } else if count > 0 {
        GratingSignal::Mild
    } else {
        GratingSignal::Normal
    };
    let percent = (count as f64 / PATTERN_SYMPTOMS.len() as f64 * 100.0).round() as u32;

    GratingResult {
        grating,
        count,
        percent,
        signal,
    }
}

pub fn interpret(responses: &PatternGlareResponses) -> PatternGlareReport {
    let low = grating_result(GratingId::Low, responses.count(GratingId::Low));
    let mid = grating_result(GratingId::Mid, responses.count(GratingId::Mid));

    let verdict = if mid.count > DIAGNOSTIC_THRESHOLD {
        PatternGlareVerdict::Positive
    } else if mid.count >= 1 {
        PatternGlareVerdict::Borderline
    } else {
        PatternGlareVerdict::Normal
    };

    PatternGlareReport {
        low,
        mid,
        high_count: responses.count(GratingId::High),
        verdict,
        suggestibility: low.count > CONTROL_THRESHOLD,
    }
}
