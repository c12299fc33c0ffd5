//! Matching a weight pattern against the catalog.

use chandas_types::{MatchKind, MeterTemplate};

use crate::catalog::MeterCatalog;
use crate::score;

/// The matcher's verdict for one verse.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterMatch {
    pub name: String,
    pub kind: MatchKind,
    /// Quarter width behind the verdict, when one is known.
    pub syllables_per_quarter: Option<usize>,
    pub explanation: String,
}

impl MeterMatch {
    pub fn detected(&self) -> bool {
        self.kind != MatchKind::Unknown
    }

    pub fn confidence(&self) -> f64 {
        score::confidence(self.kind)
    }
}

/// Matches syllable counts and patterns against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct MeterMatcher<'c> {
    catalog: &'c MeterCatalog,
}

impl<'c> MeterMatcher<'c> {
    pub fn new(catalog: &'c MeterCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c MeterCatalog {
        self.catalog
    }

    /// Find the meter for a verse of `count` syllables with weight `pattern`.
    ///
    /// Templates are tried in catalog order among those whose total equals
    /// `count`. A flexible template is accepted on count alone. A fixed
    /// template is accepted when its quarter, repeated over the whole verse,
    /// equals `pattern`, or when the quarter and the pattern contain one
    /// another. Without a catalog hit the count-based fallbacks apply.
    pub fn find(&self, count: usize, pattern: &str) -> MeterMatch {
        for template in self.catalog {
            if template.total_syllables != count {
                continue;
            }
            match &template.fixed_pattern {
                None => return catalog_hit(template, MatchKind::Flexible, false),
                Some(quarter) => {
                    let quarter = quarter.to_string();
                    let full = quarter.repeat(template.quarters());
                    if full == pattern {
                        return catalog_hit(template, MatchKind::FixedPattern, false);
                    }
                    if !pattern.is_empty()
                        && (pattern.contains(&quarter) || quarter.contains(pattern))
                    {
                        return catalog_hit(template, MatchKind::FixedPattern, true);
                    }
                }
            }
        }
        fallback(count)
    }
}

fn catalog_hit(template: &MeterTemplate, kind: MatchKind, variant: bool) -> MeterMatch {
    let mut explanation = if template.description.is_empty() {
        format!("Detected {} total syllables", template.total_syllables)
    } else {
        template.description.clone()
    };
    if variant {
        explanation.push_str(" (quarter pattern found within a variant verse)");
    }
    MeterMatch {
        name: template.name.clone(),
        kind,
        syllables_per_quarter: Some(template.syllables_per_quarter),
        explanation,
    }
}

fn fallback(count: usize) -> MeterMatch {
    if count == 8 {
        return MeterMatch {
            name: "Anushtup (single quarter detected)".to_string(),
            kind: MatchKind::SingleQuarter,
            syllables_per_quarter: Some(8),
            explanation: "8 syllables detected - appears to be one quarter of Anushtup meter"
                .to_string(),
        };
    }
    if count > 0 && count % 8 == 0 {
        let quarters = count / 8;
        return MeterMatch {
            name: format!("Anushtup ({quarters}/4 quarters)"),
            kind: MatchKind::MultipleOfEight,
            syllables_per_quarter: Some(8),
            explanation: format!(
                "{count} syllables ({quarters} quarters of 8) - Anushtup pattern"
            ),
        };
    }
    if count > 0 && count % 4 == 0 {
        let per_quarter = count / 4;
        return MeterMatch {
            name: format!("Unknown ({per_quarter} syl/quarter)"),
            kind: MatchKind::DerivedPerQuarter,
            syllables_per_quarter: Some(per_quarter),
            explanation: format!("{count} total syllables, {per_quarter} per quarter"),
        };
    }
    MeterMatch {
        name: "Unknown".to_string(),
        kind: MatchKind::Unknown,
        syllables_per_quarter: None,
        explanation: format!("Detected {count} syllables - no standard pattern match"),
    }
}
