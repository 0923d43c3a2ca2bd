//! Attribute values of a raw node.
//!
//! The dump producer writes attribute values in several shapes. Integers that
//! do not fit a JSON number losslessly are written as a pair of 32-bit halves,
//! colors as a record of four percentages. Everything else is kept opaque.

use serde::{Deserialize, Serialize};

/// A 64-bit integer encoded as low/high 32-bit halves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntPair {
    /// Low 32 bits.
    pub int_low32: i64,
    /// High 32 bits (not always written).
    #[serde(default)]
    pub int_high32: Option<i64>,
}

/// A color as four channel percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecord {
    /// Alpha channel.
    pub a_percent: f64,
    /// Red channel.
    pub r_percent: f64,
    /// Green channel.
    pub g_percent: f64,
    /// Blue channel.
    pub b_percent: f64,
}

/// One value of a node's attribute map.
///
/// Variants are tried in declaration order, so a JSON `true` is a `Bool`
/// and never an `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag.
    Bool(bool),
    /// Plain JSON number.
    Number(f64),
    /// String value.
    Text(String),
    /// Low/high 32-bit integer pair.
    Pair(IntPair),
    /// Color record.
    Color(ColorRecord),
    /// Any shape this crate does not interpret.
    Other(serde_json::Value),
}

impl AttrValue {
    /// Decode a numeric value regardless of its on-wire shape.
    ///
    /// Numbers are returned as is, pairs yield their low 32 bits and any
    /// other shape decodes to 0.
    pub fn numeric(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Pair(pair) => pair.int_low32 as f64,
            _ => 0.0,
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the color record, if this is a color.
    pub fn as_color(&self) -> Option<&ColorRecord> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }
}
