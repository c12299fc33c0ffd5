//! Five-step narration of an identification.
//!
//! Pure formatting over an existing [`IdentificationResult`]; nothing here
//! re-weighs or re-matches.

use chandas_catalog::{ConfidenceBand, MeterCatalog};
use chandas_segment::normalize;
use chandas_types::{IdentificationResult, IdentificationStep};
use serde::{Deserialize, Serialize};

/// Truncation limits for the narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Characters of cleaned text shown in step 1.
    pub preview_chars: usize,
    /// Leading syllables shown in step 2.
    pub sample_syllables: usize,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            preview_chars: 50,
            sample_syllables: 5,
        }
    }
}

/// Render the five identification steps, always in the same order.
pub fn trace(
    raw: &str,
    result: &IdentificationResult,
    catalog: &MeterCatalog,
    options: TraceOptions,
) -> Vec<IdentificationStep> {
    vec![
        preprocessing(raw, options),
        segmentation(result, options),
        classification(result),
        pattern_matching(result, catalog),
        confidence(result),
    ]
}

fn step(number: u8, name: &str, description: String, result: String) -> IdentificationStep {
    IdentificationStep {
        step_number: number,
        step_name: name.to_string(),
        description,
        result,
    }
}

fn preprocessing(raw: &str, options: TraceOptions) -> IdentificationStep {
    let cleaned = normalize(raw);
    let mut preview: String = cleaned.chars().take(options.preview_chars).collect();
    if cleaned.chars().count() > options.preview_chars {
        preview.push_str("...");
    }
    step(
        1,
        "Text Preprocessing",
        "Remove punctuation marks (।॥), whitespace, and newlines to get clean Devanagari text"
            .to_string(),
        format!("Cleaned text: {preview}"),
    )
}

fn segmentation(result: &IdentificationResult, options: TraceOptions) -> IdentificationStep {
    let breakdown = &result.syllable_breakdown;
    let mut sample = breakdown
        .iter()
        .take(options.sample_syllables)
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if breakdown.len() > options.sample_syllables {
        sample.push_str("...");
    }
    step(
        2,
        "Syllable Segmentation (Akshara Vibhajana)",
        "Split text into aksharas: an independent vowel stands alone; a consonant takes any \
         virama-joined (्) conjunct consonants, then one optional vowel sign \
         (ा, ि, ी, ु, ू, े, ै, ो, ौ), then an optional anusvara (ं) or visarga (ः)"
            .to_string(),
        format!("Total syllables: {}. Examples: {sample}", breakdown.len()),
    )
}

fn classification(result: &IdentificationResult) -> IdentificationStep {
    let pattern = &result.weight_pattern;
    let laghu = pattern.chars().filter(|c| *c == 'L').count();
    let guru = pattern.chars().filter(|c| *c == 'G').count();
    let rules = [
        "• Laghu (L): Short vowel (अ, इ, उ, ऋ) without conjunct",
        "• Guru (G): Long vowel (आ, ई, ऊ, ए, ऐ, ओ, औ) OR conjunct (्) OR anusvara (ं) OR visarga (ः) OR end of line",
    ];
    step(
        3,
        "Laghu-Guru Classification (Mātrā Analysis)",
        format!(
            "Classify each syllable based on prosodic weight:\n{}",
            rules.join("\n")
        ),
        format!("Pattern: {pattern}\nLaghu: {laghu}, Guru: {guru}"),
    )
}

fn pattern_matching(result: &IdentificationResult, catalog: &MeterCatalog) -> IdentificationStep {
    let count = result.syllable_count();
    let rationale = match count {
        32 => "32 syllables (8 per quarter × 4 quarters) matches Anushtup meter structure".to_string(),
        44 => format!(
            "44 syllables (11 per quarter × 4 quarters). Pattern {} matched against Indravajra/Upendravajra templates",
            result.weight_pattern
        ),
        56 => "56 syllables (14 per quarter × 4 quarters) matches Vasantatilaka structure"
            .to_string(),
        n if n > 0 && n % 8 == 0 => format!(
            "{n} syllables = {} quarters of 8. Likely Anushtup variant",
            n / 8
        ),
        n => format!(
            "{n} syllables analyzed. Pattern compared against database of known chandas signatures"
        ),
    };

    let mut description = String::from(
        "Compare syllable count and L-G pattern against database of known chandas, in priority order:",
    );
    for template in catalog {
        description.push_str("\n• ");
        description.push_str(&template.name);
        description.push_str(": ");
        match &template.fixed_pattern {
            Some(pattern) => description.push_str(&format!(
                "{} syllables, {pattern} pattern",
                template.total_syllables
            )),
            None => description.push_str(&format!(
                "{} syllables, flexible pattern",
                template.total_syllables
            )),
        }
    }

    step(
        4,
        "Pattern Matching (Chandas Parichaya)",
        description,
        format!("Matched: {}\n{rationale}", result.meter_name),
    )
}

fn confidence(result: &IdentificationResult) -> IdentificationStep {
    let band = ConfidenceBand::of(result.confidence);
    step(
        5,
        "Confidence Score Calculation",
        "Calculate confidence based on:\n• Pattern match accuracy (exact vs partial)\n• Syllable count alignment with known meters\n• Consistency of L-G pattern across quarters"
            .to_string(),
        format!(
            "Confidence: {:.2}\nReason: {}",
            result.confidence,
            band.reason()
        ),
    )
}
