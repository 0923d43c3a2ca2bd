//! Percentage-valued records: colors and hit points.

use serde::{Deserialize, Serialize};

use crate::raw::ColorRecord;

/// Clamp a percentage into `[0, 100]`.
///
/// `NaN` clamps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// A color as four channel percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Alpha channel.
    pub a: f64,
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Create a color, clamping every channel.
    pub fn new(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self {
            a: clamp_percent(a),
            r: clamp_percent(r),
            g: clamp_percent(g),
            b: clamp_percent(b),
        }
    }
}

impl From<&ColorRecord> for Color {
    fn from(record: &ColorRecord) -> Self {
        Self::new(record.a_percent, record.r_percent, record.g_percent, record.b_percent)
    }
}

/// Shield, armor and structure as percentages of full health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitPointPercentages {
    /// Shield.
    pub shield: f64,
    /// Armor.
    pub armor: f64,
    /// Structure (hull).
    pub structure: f64,
}

impl HitPointPercentages {
    /// Create a record, clamping every value.
    pub fn new(shield: f64, armor: f64, structure: f64) -> Self {
        Self {
            shield: clamp_percent(shield),
            armor: clamp_percent(armor),
            structure: clamp_percent(structure),
        }
    }
}
