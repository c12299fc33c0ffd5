//! # chandas-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the analysis layers. These mirror the CLI
//! flags without any Clap dependency, so library consumers and the JSON
//! entrypoint can build them directly.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values
//!
//! ## What does NOT belong here
//! * Clap parsing or config file loading (use chandas-config)
//! * Catalog validation or analysis logic

use chandas_types::{MeterTemplate, WeightPattern};
use serde::{Deserialize, Serialize};

/// A user-supplied meter, appended after the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterSpec {
    pub name: String,

    /// Syllables in one quarter.
    pub syllables_per_quarter: usize,

    /// Total syllables; defaults to four quarters.
    #[serde(default)]
    pub total_syllables: Option<usize>,

    /// One quarter of `L`/`G` symbols. Omit for a count-only meter.
    #[serde(default)]
    pub pattern: Option<WeightPattern>,

    #[serde(default)]
    pub description: String,
}

impl MeterSpec {
    /// Total syllables, or `None` when four quarters overflow `usize`.
    pub fn total(&self) -> Option<usize> {
        match self.total_syllables {
            Some(total) => Some(total),
            None => self.syllables_per_quarter.checked_mul(4),
        }
    }

    /// The catalog template, or `None` when the total cannot be represented.
    pub fn to_template(&self) -> Option<MeterTemplate> {
        Some(MeterTemplate {
            name: self.name.clone(),
            total_syllables: self.total()?,
            syllables_per_quarter: self.syllables_per_quarter,
            fixed_pattern: self.pattern.clone(),
            description: self.description.clone(),
        })
    }
}

/// Settings for one analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Force the last syllable of each line (and of the verse) to guru.
    pub line_end_forces_heavy: bool,

    /// Characters of cleaned text shown in the narration's first step.
    pub preview_chars: usize,

    /// Leading syllables listed in the narration's second step.
    pub sample_syllables: usize,

    /// Extra meters, lowest priority, in file order.
    pub meters: Vec<MeterSpec>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            line_end_forces_heavy: true,
            preview_chars: 50,
            sample_syllables: 5,
            meters: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(per_quarter: usize, total: Option<usize>) -> MeterSpec {
        MeterSpec {
            name: "Pramanika".into(),
            syllables_per_quarter: per_quarter,
            total_syllables: total,
            pattern: None,
            description: String::new(),
        }
    }

    #[test]
    fn meter_spec_defaults_to_four_quarters() {
        let template = spec(8, None).to_template().unwrap();
        assert_eq!(template.total_syllables, 32);
        assert_eq!(template.quarters(), 4);
    }

    #[test]
    fn explicit_total_is_kept() {
        assert_eq!(spec(8, Some(16)).total(), Some(16));
    }

    #[test]
    fn huge_quarter_has_no_total() {
        assert_eq!(spec(usize::MAX / 2, None).total(), None);
        assert!(spec(usize::MAX / 2, None).to_template().is_none());
    }
}
