//! Chord archetype and expanded-entry models
//!
//! An archetype is a root-relative interval recipe; expansion pins it to a
//! concrete root and fills in the absolute spellings and the pitch-class
//! fingerprint. Field names follow the persisted JSON dictionary format
//! (`fullName`, `forteNumber`, `baseDecimal`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn empty_string_value() -> Value {
    Value::String(String::new())
}

/// Input unit: a chord quality defined by root-relative interval labels.
///
/// `intervals` is required; the remaining fields are descriptive metadata
/// that passes through expansion unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordArchetype {
    pub intervals: Vec<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default, rename = "fullName")]
    pub full_name: String,

    /// Forte set-class number, when the source dictionary carries one
    #[serde(default, rename = "forteNumber")]
    pub forte_number: String,

    /// Fingerprint of the untransposed archetype; kept as raw JSON since
    /// source dictionaries store it as either a number or a string
    #[serde(default = "empty_string_value", rename = "baseDecimal")]
    pub base_decimal: Value,
}

/// Pitch-class fingerprint of a resolved note set
///
/// `binary` has pitch class 0 at index 0 (the most significant bit);
/// `decimal` is that string read base-2, so it ranges over 0..=4095.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub pcs: Vec<u8>,
    pub binary: String,
    pub decimal: u16,
}

/// Output unit: one archetype rooted at one canonical spelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedChordEntry {
    pub root: String,
    pub intervals: Vec<String>,

    /// One slot per input interval, in input order. `None` marks an interval
    /// whose target pitch has no spelling in the reference table; slots are
    /// never compacted, so positions always line up with `intervals`.
    pub notes: Vec<Option<String>>,

    pub pcs: Vec<u8>,
    pub binary: String,
    pub decimal: u16,

    pub aliases: Vec<String>,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(rename = "forteNumber")]
    pub forte_number: String,

    #[serde(rename = "baseDecimal")]
    pub base_decimal: Value,
}
