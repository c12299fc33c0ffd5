//! Confidence scoring.

use chandas_types::MatchKind;
use serde::{Deserialize, Serialize};

/// Fixed confidence for each kind of match.
#[must_use]
pub fn confidence(kind: MatchKind) -> f64 {
    match kind {
        MatchKind::FixedPattern => 0.95,
        MatchKind::Flexible => 0.85,
        MatchKind::SingleQuarter => 0.75,
        MatchKind::MultipleOfEight => 0.70,
        MatchKind::DerivedPerQuarter => 0.50,
        MatchKind::Unknown => 0.30,
    }
}

/// Qualitative reading of a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Exact,
    Strong,
    Partial,
    Low,
}

impl ConfidenceBand {
    #[must_use]
    pub fn of(confidence: f64) -> Self {
        if confidence >= 0.9 {
            ConfidenceBand::Exact
        } else if confidence >= 0.7 {
            ConfidenceBand::Strong
        } else if confidence >= 0.5 {
            ConfidenceBand::Partial
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            ConfidenceBand::Exact => "Exact match with standard pattern and syllable count",
            ConfidenceBand::Strong => {
                "Strong match with minor variations acceptable in classical texts"
            }
            ConfidenceBand::Partial => {
                "Partial match - incomplete verse or variant form detected"
            }
            ConfidenceBand::Low => "Low confidence - unusual pattern or insufficient data",
        }
    }
}
