use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Whether a reading test is run without or with the candidate filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReadingPhase {
    Baseline,
    Tinted,
}

impl ReadingPhase {
    pub fn label(self) -> &'static str {
        match self {
            ReadingPhase::Baseline => "WITHOUT filter",
            ReadingPhase::Tinted => "WITH filter",
        }
    }
}

/// Words-per-minute results of one phase, in the order they were taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
#[ts(as = "Vec<u32>")]
pub struct ReadingSamples {
    samples: Vec<u32>,
}

impl ReadingSamples {
    /// Readings required per phase before the protocol moves on.
    pub const REQUIRED: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. Returns `false` (and drops it) when the phase is full.
    pub fn push(&mut self, wpm: u32) -> bool {
        if self.is_complete() {
            return false;
        }
        self.samples.push(wpm);
        true
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.samples.len() >= Self::REQUIRED
    }

    /// 0-based reading slot; `get(0)` is the 1st reading.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.samples.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.samples
    }
}

impl TryFrom<Vec<u32>> for ReadingSamples {
    type Error = CoreError;

    fn try_from(samples: Vec<u32>) -> Result<Self, Self::Error> {
        if samples.len() > Self::REQUIRED {
            return Err(CoreError::TooManySamples(samples.len()));
        }
        Ok(Self { samples })
    }
}

impl From<ReadingSamples> for Vec<u32> {
    fn from(value: ReadingSamples) -> Self {
        value.samples
    }
}
