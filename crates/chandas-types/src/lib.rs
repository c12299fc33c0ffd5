//! # chandas-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures and contracts shared by every
//! `chandas` crate. It contains only data types, Serde definitions, and
//! `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON shape of
//! [`IdentificationResult`] and [`IdentificationStep`], which downstream
//! services serialize straight into their responses. Removed or renamed
//! fields bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (syllables, patterns, templates, results)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * Script handling or segmentation
//! * Catalog contents or matching rules
//! * File I/O, CLI parsing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The current schema version for identification results.
pub const SCHEMA_VERSION: u32 = 1;

/// Metrical weight of a syllable.
///
/// `Light` is laghu (one mātrā), `Heavy` is guru (two mātrās).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weight {
    #[serde(rename = "L")]
    Light,
    #[serde(rename = "G")]
    Heavy,
}

impl Weight {
    /// Pattern symbol: `L` for laghu, `G` for guru.
    pub fn symbol(self) -> char {
        match self {
            Weight::Light => 'L',
            Weight::Heavy => 'G',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'L' => Some(Weight::Light),
            'G' => Some(Weight::Heavy),
            _ => None,
        }
    }

    pub fn is_heavy(self) -> bool {
        self == Weight::Heavy
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single akshara with its metrical weight.
///
/// `position` is 1-based, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub text: String,
    pub weight: Weight,
    pub position: usize,
}

/// Ordered laghu/guru flags, one per syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WeightPattern(Vec<Weight>);

impl WeightPattern {
    pub fn new(weights: Vec<Weight>) -> Self {
        Self(weights)
    }

    /// Collect the weights of a syllable sequence, preserving order.
    pub fn from_syllables(syllables: &[Syllable]) -> Self {
        Self(syllables.iter().map(|s| s.weight).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn weights(&self) -> &[Weight] {
        &self.0
    }

    pub fn light_count(&self) -> usize {
        self.0.iter().filter(|w| **w == Weight::Light).count()
    }

    pub fn heavy_count(&self) -> usize {
        self.0.iter().filter(|w| **w == Weight::Heavy).count()
    }
}

impl fmt::Display for WeightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in &self.0 {
            write!(f, "{}", w.symbol())?;
        }
        Ok(())
    }
}

/// Error returned when a pattern string holds anything other than `L`/`G`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid weight symbol '{symbol}' at index {index} (expected 'L' or 'G')")]
pub struct InvalidSymbol {
    pub symbol: char,
    pub index: usize,
}

impl FromStr for WeightPattern {
    type Err = InvalidSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| Weight::from_symbol(symbol).ok_or(InvalidSymbol { symbol, index }))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Serialize for WeightPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeightPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named meter template.
///
/// `fixed_pattern`, when present, describes exactly one quarter (pāda) and is
/// `syllables_per_quarter` symbols long. Templates without a fixed pattern are
/// matched on syllable count alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterTemplate {
    pub name: String,
    pub total_syllables: usize,
    pub syllables_per_quarter: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_pattern: Option<WeightPattern>,
    #[serde(default)]
    pub description: String,
}

impl MeterTemplate {
    pub fn is_flexible(&self) -> bool {
        self.fixed_pattern.is_none()
    }

    pub fn quarters(&self) -> usize {
        if self.syllables_per_quarter == 0 {
            0
        } else {
            self.total_syllables / self.syllables_per_quarter
        }
    }
}

/// How a meter was (or was not) found.
///
/// Ordered from strongest to weakest evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Catalog template with a fixed quarter pattern, matched on count and pattern.
    FixedPattern,
    /// Catalog template without a fixed pattern, matched on count alone.
    Flexible,
    /// Exactly eight syllables: one anushtup quarter.
    SingleQuarter,
    /// A positive multiple of eight that no template claimed.
    MultipleOfEight,
    /// Divisible by four; quarter width derived from the count.
    DerivedPerQuarter,
    Unknown,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::FixedPattern => "fixed_pattern",
            MatchKind::Flexible => "flexible",
            MatchKind::SingleQuarter => "single_quarter",
            MatchKind::MultipleOfEight => "multiple_of_eight",
            MatchKind::DerivedPerQuarter => "derived_per_quarter",
            MatchKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one identification call.
///
/// Always fully populated, including for empty or non-Devanagari input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationResult {
    pub meter_name: String,
    pub syllable_breakdown: Vec<Syllable>,
    pub weight_pattern: String,
    pub explanation: String,
    pub confidence: f64,
    pub detected: bool,
    pub match_kind: MatchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllable_count_per_quarter: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gana_pattern: Option<String>,
}

impl IdentificationResult {
    pub fn syllable_count(&self) -> usize {
        self.syllable_breakdown.len()
    }
}

/// One line of the identification narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationStep {
    pub step_number: u8,
    pub step_name: String,
    pub description: String,
    pub result: String,
}
