// BDD-style scenario tests for chandas-explain

use chandas_catalog::MeterCatalog;
use chandas_explain::{TraceOptions, lookup, terms, trace};
use chandas_types::{IdentificationResult, MatchKind, Syllable, Weight};

fn result_with(count: usize, name: &str, confidence: f64, kind: MatchKind) -> IdentificationResult {
    let syllable_breakdown: Vec<Syllable> = (1..=count)
        .map(|position| Syllable {
            text: if position % 2 == 0 { "का" } else { "क" }.to_string(),
            weight: if position % 2 == 0 { Weight::Heavy } else { Weight::Light },
            position,
        })
        .collect();
    let weight_pattern = syllable_breakdown.iter().map(|s| s.weight.symbol()).collect();
    IdentificationResult {
        meter_name: name.to_string(),
        syllable_breakdown,
        weight_pattern,
        explanation: String::new(),
        confidence,
        detected: kind != MatchKind::Unknown,
        match_kind: kind,
        syllable_count_per_quarter: None,
        gana_pattern: None,
    }
}

// ── Scenario: shape of the trace ────────────────────────────────────

#[test]
fn given_any_result_when_traced_then_five_numbered_steps() {
    let result = result_with(32, "Anushtup", 0.85, MatchKind::Flexible);
    let steps = trace("क", &result, &MeterCatalog::standard(), TraceOptions::default());
    let numbers: Vec<u8> = steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(steps[0].step_name, "Text Preprocessing");
    assert_eq!(steps[4].step_name, "Confidence Score Calculation");
}

#[test]
fn given_any_result_when_traced_then_step_names_keep_sanskrit_diacritics() {
    let result = result_with(8, "Anushtup (single quarter detected)", 0.75, MatchKind::SingleQuarter);
    let steps = trace("क", &result, &MeterCatalog::standard(), TraceOptions::default());
    let names: Vec<&str> = steps.iter().map(|s| s.step_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Text Preprocessing",
            "Syllable Segmentation (Akshara Vibhajana)",
            "Laghu-Guru Classification (Mātrā Analysis)",
            "Pattern Matching (Chandas Parichaya)",
            "Confidence Score Calculation",
        ]
    );
}

// ── Scenario: truncation ────────────────────────────────────────────

#[test]
fn given_long_text_when_traced_then_preview_is_truncated_by_characters() {
    let raw = "क".repeat(60);
    let result = result_with(60, "Unknown (15 syl/quarter)", 0.5, MatchKind::DerivedPerQuarter);
    let steps = trace(&raw, &result, &MeterCatalog::standard(), TraceOptions::default());
    assert_eq!(steps[0].result, format!("Cleaned text: {}...", "क".repeat(50)));
    assert!(steps[1].result.ends_with("क, का, क, का, क..."));
}

#[test]
fn given_custom_limits_when_traced_then_limits_apply() {
    let result = result_with(4, "Unknown (1 syl/quarter)", 0.5, MatchKind::DerivedPerQuarter);
    let options = TraceOptions {
        preview_chars: 2,
        sample_syllables: 1,
    };
    let steps = trace("ककाकका", &result, &MeterCatalog::standard(), options);
    assert_eq!(steps[0].result, "Cleaned text: कक...");
    assert_eq!(steps[1].result, "Total syllables: 4. Examples: क...");
}

// ── Scenario: rationale keyed off count ─────────────────────────────

#[test]
fn given_special_counts_when_traced_then_rationale_is_specific() {
    let catalog = MeterCatalog::standard();
    let cases = [
        (32, "matches Anushtup meter structure"),
        (44, "matched against Indravajra/Upendravajra templates"),
        (56, "matches Vasantatilaka structure"),
        (16, "16 syllables = 2 quarters of 8. Likely Anushtup variant"),
        (7, "7 syllables analyzed."),
        (0, "0 syllables analyzed."),
    ];
    for (count, needle) in cases {
        let result = result_with(count, "X", 0.3, MatchKind::Unknown);
        let steps = trace("", &result, &catalog, TraceOptions::default());
        assert!(
            steps[3].result.contains(needle),
            "count {count}: {}",
            steps[3].result
        );
        assert!(steps[3].result.starts_with("Matched: X\n"));
    }
}

#[test]
fn given_catalog_when_traced_then_description_lists_every_template_in_order() {
    let catalog = MeterCatalog::standard();
    let result = result_with(0, "Unknown", 0.3, MatchKind::Unknown);
    let steps = trace("", &result, &catalog, TraceOptions::default());
    let listed: Vec<&str> = steps[3]
        .description
        .lines()
        .skip(1)
        .filter_map(|l| l.strip_prefix("• "))
        .filter_map(|l| l.split(':').next())
        .collect();
    let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(listed, names);
}

// ── Scenario: confidence buckets ────────────────────────────────────

#[test]
fn given_confidences_when_traced_then_reason_follows_bucket() {
    let catalog = MeterCatalog::standard();
    let cases = [
        (0.95, "Exact match"),
        (0.85, "Strong match"),
        (0.70, "Strong match"),
        (0.50, "Partial match"),
        (0.30, "Low confidence"),
    ];
    for (confidence, needle) in cases {
        let result = result_with(4, "X", confidence, MatchKind::Unknown);
        let steps = trace("", &result, &catalog, TraceOptions::default());
        assert!(steps[4].result.contains(needle), "{confidence}: {}", steps[4].result);
        assert!(steps[4].result.starts_with(&format!("Confidence: {confidence:.2}")));
    }
}

// ── Scenario: glossary ──────────────────────────────────────────────

#[test]
fn given_alias_when_lookup_then_canonical_entry() {
    assert!(lookup("halant").unwrap().starts_with("virama:"));
    assert!(lookup("Light").unwrap().starts_with("laghu:"));
    assert!(lookup("quarter").unwrap().starts_with("pada:"));
    assert_eq!(lookup("tabla"), None);
}

#[test]
fn given_terms_listing_then_header_and_entries() {
    let listing = terms();
    assert!(listing.starts_with("Available prosody terms:\n"));
    assert!(listing.contains("- gana\n"));
}
