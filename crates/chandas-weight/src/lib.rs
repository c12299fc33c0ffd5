//! # chandas-weight
//!
//! Assigns laghu (light) or guru (heavy) to each akshara.
//!
//! Precedence, first match wins:
//! 1. line-final syllable, when [`ClassifyOptions::line_end_forces_heavy`] is set;
//! 2. contains a long vowel (independent or sign);
//! 3. contains a virama;
//! 4. contains anusvara or visarga;
//! 5. otherwise light.

use std::collections::BTreeSet;

use chandas_segment::Akshara;
use chandas_segment::script::{is_anusvara_or_visarga, is_long_vowel, is_virama};
use chandas_types::{Syllable, Weight, WeightPattern};
use serde::{Deserialize, Serialize};

/// Classifier switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    /// Treat the last syllable of every line (and of the verse) as guru.
    ///
    /// Defaults to `true`.
    pub line_end_forces_heavy: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            line_end_forces_heavy: true,
        }
    }
}

/// Weigh a single unit.
pub fn weigh(unit: &str, is_line_end: bool, options: ClassifyOptions) -> Weight {
    if is_line_end && options.line_end_forces_heavy {
        return Weight::Heavy;
    }
    if unit.chars().any(is_long_vowel) {
        return Weight::Heavy;
    }
    if unit.chars().any(is_virama) {
        return Weight::Heavy;
    }
    if unit.chars().any(is_anusvara_or_visarga) {
        return Weight::Heavy;
    }
    Weight::Light
}

/// 1-based positions that close a line.
///
/// The verse end is always included for non-empty input. Interior line ends
/// are only trusted when `line_counts` accounts for every syllable; otherwise
/// the boundaries cannot be placed and only the verse end is returned.
pub fn line_end_positions(total: usize, line_counts: &[usize]) -> BTreeSet<usize> {
    let mut ends = BTreeSet::new();
    if total == 0 {
        return ends;
    }
    if line_counts.iter().sum::<usize>() == total {
        let mut acc = 0;
        for count in line_counts {
            acc += count;
            ends.insert(acc);
        }
    }
    ends.insert(total);
    ends
}

/// Weigh a segmented sequence. Output preserves length and order.
pub fn classify(
    aksharas: &[Akshara],
    line_ends: &BTreeSet<usize>,
    options: ClassifyOptions,
) -> Vec<Syllable> {
    aksharas
        .iter()
        .map(|a| Syllable {
            text: a.text.clone(),
            weight: weigh(&a.text, line_ends.contains(&a.position), options),
            position: a.position,
        })
        .collect()
}

/// Convenience: the pattern of a classified sequence.
pub fn pattern_of(syllables: &[Syllable]) -> WeightPattern {
    WeightPattern::from_syllables(syllables)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON: ClassifyOptions = ClassifyOptions {
        line_end_forces_heavy: true,
    };
    const OFF: ClassifyOptions = ClassifyOptions {
        line_end_forces_heavy: false,
    };

    #[test]
    fn short_open_syllable_is_light() {
        assert_eq!(weigh("क", false, ON), Weight::Light);
        assert_eq!(weigh("कि", false, ON), Weight::Light);
        assert_eq!(weigh("अ", false, ON), Weight::Light);
    }

    #[test]
    fn long_vowels_are_heavy() {
        assert_eq!(weigh("का", false, OFF), Weight::Heavy);
        assert_eq!(weigh("ई", false, OFF), Weight::Heavy);
        assert_eq!(weigh("श्चै", false, OFF), Weight::Heavy);
    }

    #[test]
    fn conjunct_and_marks_are_heavy() {
        assert_eq!(weigh("र्म", false, OFF), Weight::Heavy);
        assert_eq!(weigh("वः", false, OFF), Weight::Heavy);
        assert_eq!(weigh("सं", false, OFF), Weight::Heavy);
    }

    #[test]
    fn line_end_rule_is_switchable() {
        assert_eq!(weigh("य", true, ON), Weight::Heavy);
        assert_eq!(weigh("य", true, OFF), Weight::Light);
    }

    #[test]
    fn line_ends_need_full_accounting() {
        assert_eq!(line_end_positions(0, &[]), BTreeSet::new());
        assert_eq!(
            line_end_positions(16, &[8, 8]),
            BTreeSet::from([8usize, 16])
        );
        assert_eq!(line_end_positions(16, &[8, 7]), BTreeSet::from([16usize]));
    }

    #[test]
    fn default_forces_line_end_heavy() {
        assert!(ClassifyOptions::default().line_end_forces_heavy);
    }
}
