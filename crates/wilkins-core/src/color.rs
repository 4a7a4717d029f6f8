//! HSL color conversion and legible-foreground selection for tinted surfaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Lightness levels (percent) at which a tint is rendered on each surface.
pub mod lightness {
    pub const FAMILY_SWATCH: f64 = 68.0;
    pub const SATURATION_OPTION: f64 = 72.0;
    pub const LIVE_PREVIEW: f64 = 86.0;
    pub const READING_BACKGROUND: f64 = 93.0;
    pub const OVERLAY: f64 = 80.0;
    pub const VALIDATION_SWATCH: f64 = 65.0;
    pub const PRESCRIBED: f64 = 60.0;
    pub const RESULT_HERO: f64 = 72.0;
}

/// Saturation (percent) used for the color family swatches.
pub const FAMILY_SWATCH_SATURATION: f64 = 70.0;

/// A `#rrggbb` color, always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(as = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        // Parsing is validated on construction, so every pair is valid hex.
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }

    /// Upper-case form printed for the optical laboratory.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl FromStr for HexColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(CoreError::InvalidHex(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in percent) to hex.
///
/// Each channel is computed independently with the piecewise-linear HSL
/// formula, so no trigonometry or sector branching is involved. Inputs
/// outside their domains are clamped.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> HexColor {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * c).round().clamp(0.0, 255.0) as u8
    };

    HexColor::from_rgb(channel(0.0), channel(8.0), channel(4.0))
}

/// Foreground to draw text over a colored background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Foreground {
    Dark,
    Light,
}

impl Foreground {
    pub const DARK_HEX: &'static str = "#1a1a2e";
    pub const LIGHT_HEX: &'static str = "#f5f0e8";

    pub fn hex(self) -> &'static str {
        match self {
            Foreground::Dark => Self::DARK_HEX,
            Foreground::Light => Self::LIGHT_HEX,
        }
    }
}

/// Perceived luminance in `[0, 1]` using the Rec. 601 weights.
pub fn luminance(hex: &HexColor) -> f64 {
    let (r, g, b) = hex.rgb();
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Dark text on backgrounds brighter than 0.5, light text otherwise
/// (including exactly 0.5).
pub fn contrast_color(hex: &HexColor) -> Foreground {
    if luminance(hex) > 0.5 {
        Foreground::Dark
    } else {
        Foreground::Light
    }
}
