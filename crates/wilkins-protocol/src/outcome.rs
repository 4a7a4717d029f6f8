//! Baseline versus tinted reading speed comparison.

use serde::Serialize;
use ts_rs::TS;

use wilkins_core::models::reading::ReadingSamples;

/// Relative gain (percent) that counts as clinically significant.
pub const SIGNIFICANT_PERCENT: i64 = 15;

/// Absolute gain (words per minute) that counts as clinically significant.
pub const SIGNIFICANT_WPM: i64 = 22;

/// Relative gain below significance that still counts as marginal.
pub const MARGINAL_PERCENT: i64 = 5;

/// Rounded average; `None` for an empty list.
pub fn mean(samples: &[u32]) -> Option<u32> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as u64;
    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    // Round half up, in integers.
    Some(((2 * sum + n) / (2 * n)) as u32)
}

/// Mean of a phase, defined only once both readings are taken.
pub fn phase_mean(samples: &ReadingSamples) -> Option<u32> {
    if !samples.is_complete() {
        return None;
    }
    mean(samples.as_slice())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImprovementTier {
    Significant,
    Marginal,
    Absent,
}

impl ImprovementTier {
    pub fn description(self) -> &'static str {
        match self {
            ImprovementTier::Significant => "Significant improvement: prescription indicated",
            ImprovementTier::Marginal => {
                "Marginal improvement: reconsider the saturation or color family"
            }
            ImprovementTier::Absent => {
                "No objective improvement: review the filter selection or rule out other causes"
            }
        }
    }
}

/// Which criterion made an improvement significant. The relative criterion
/// is reported when both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignificanceReason {
    Relative,
    Absolute,
}

impl SignificanceReason {
    pub fn label(self) -> String {
        match self {
            SignificanceReason::Relative => format!(">={SIGNIFICANT_PERCENT}%"),
            SignificanceReason::Absolute => format!(">={SIGNIFICANT_WPM} wpm"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Improvement {
    /// Rounded relative change, percent.
    pub percent: i64,
    /// Change in words per minute.
    pub absolute: i64,
}

impl Improvement {
    /// `None` when the baseline mean is zero.
    pub fn between(baseline: u32, tinted: u32) -> Option<Self> {
        if baseline == 0 {
            return None;
        }
        let absolute = i64::from(tinted) - i64::from(baseline);
        let ratio = absolute as f64 / f64::from(baseline) * 100.0;
        Some(Self {
            percent: (ratio + 0.5).floor() as i64,
            absolute,
        })
    }

    pub fn is_significant(&self) -> bool {
        self.percent >= SIGNIFICANT_PERCENT || self.absolute >= SIGNIFICANT_WPM
    }

    pub fn tier(&self) -> ImprovementTier {
        if self.is_significant() {
            ImprovementTier::Significant
        } else if self.percent >= MARGINAL_PERCENT {
            ImprovementTier::Marginal
        } else {
            ImprovementTier::Absent
        }
    }

    pub fn reason(&self) -> Option<SignificanceReason> {
        if self.percent >= SIGNIFICANT_PERCENT {
            Some(SignificanceReason::Relative)
        } else if self.absolute >= SIGNIFICANT_WPM {
            Some(SignificanceReason::Absolute)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub baseline_mean: Option<u32>,
    pub tinted_mean: Option<u32>,
    pub improvement: Option<Improvement>,
}

impl Outcome {
    pub fn from_samples(baseline: &ReadingSamples, tinted: &ReadingSamples) -> Self {
        let baseline_mean = phase_mean(baseline);
        let tinted_mean = phase_mean(tinted);
        let improvement = match (baseline_mean, tinted_mean) {
            (Some(b), Some(t)) => Improvement::between(b, t),
            _ => None,
        };
        Self {
            baseline_mean,
            tinted_mean,
            improvement,
        }
    }

    pub fn is_significant(&self) -> bool {
        self.improvement.is_some_and(|i| i.is_significant())
    }

    pub fn tier(&self) -> ImprovementTier {
        self.improvement
            .map_or(ImprovementTier::Absent, |i| i.tier())
    }
}
