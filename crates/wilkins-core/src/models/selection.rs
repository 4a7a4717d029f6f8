use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{
    COLOR_FAMILIES, ColorFamily, DEFAULT_SATURATION, SATURATION_LEVELS, SaturationLevel,
};
use crate::color::{self, HexColor};
use crate::error::CoreError;

/// Bounds-checked index into [`COLOR_FAMILIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "usize", into = "usize")]
#[ts(as = "usize")]
pub struct FamilyIndex(usize);

impl FamilyIndex {
    pub fn new(index: usize) -> Result<Self, CoreError> {
        if index >= COLOR_FAMILIES.len() {
            return Err(CoreError::FamilyOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn family(self) -> &'static ColorFamily {
        &COLOR_FAMILIES[self.0]
    }
}

impl TryFrom<usize> for FamilyIndex {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FamilyIndex> for usize {
    fn from(value: FamilyIndex) -> Self {
        value.0
    }
}

/// Bounds-checked index into [`SATURATION_LEVELS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "usize", into = "usize")]
#[ts(as = "usize")]
pub struct SaturationIndex(usize);

impl SaturationIndex {
    pub fn new(index: usize) -> Result<Self, CoreError> {
        if index >= SATURATION_LEVELS.len() {
            return Err(CoreError::SaturationOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn level(self) -> &'static SaturationLevel {
        &SATURATION_LEVELS[self.0]
    }
}

impl Default for SaturationIndex {
    fn default() -> Self {
        Self(DEFAULT_SATURATION)
    }
}

impl TryFrom<usize> for SaturationIndex {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SaturationIndex> for usize {
    fn from(value: SaturationIndex) -> Self {
        value.0
    }
}

/// The candidate filter: a color family (once chosen) and a saturation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorSelection {
    pub family: Option<FamilyIndex>,
    pub saturation: SaturationIndex,
}

impl ColorSelection {
    pub fn hue(&self) -> Option<u16> {
        self.family.map(|f| f.family().hue)
    }

    pub fn saturation_percent(&self) -> u8 {
        self.saturation.level().value
    }

    /// The filter rendered at the given lightness, if a family is chosen.
    pub fn tint(&self, lightness: f64) -> Option<HexColor> {
        let hue = self.hue()?;
        Some(color::hsl_to_hex(
            f64::from(hue),
            f64::from(self.saturation_percent()),
            lightness,
        ))
    }
}
