// BDD-style scenario tests for chandas-weight

use chandas_segment::{line_syllable_counts, segment_verse};
use chandas_weight::{ClassifyOptions, classify, line_end_positions, pattern_of};

const GITA_1_1: &str = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।\nमामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय ॥१॥";

fn pattern(raw: &str, options: ClassifyOptions) -> String {
    let units = segment_verse(raw);
    let ends = line_end_positions(units.len(), &line_syllable_counts(raw));
    pattern_of(&classify(&units, &ends, options)).to_string()
}

// ── Scenario: default rules ─────────────────────────────────────────

#[test]
fn given_gita_opening_when_classified_then_expected_laghu_guru_pattern() {
    assert_eq!(
        pattern(GITA_1_1, ClassifyOptions::default()),
        "LGGGLLGGLLGGLLGGGLGGGGGLLLLGLLGG"
    );
}

// ── Scenario: line-end rule disabled ────────────────────────────────

#[test]
fn given_line_end_rule_off_when_classified_then_final_short_syllable_stays_light() {
    let options = ClassifyOptions {
        line_end_forces_heavy: false,
    };
    let got = pattern(GITA_1_1, options);
    assert!(got.ends_with("LGL"), "got {got}");
    assert_eq!(got.len(), 32);
}

// ── Scenario: interior line ends ────────────────────────────────────

#[test]
fn given_short_syllables_on_two_lines_when_classified_then_each_line_closes_heavy() {
    let got = pattern("कककक\nकककक", ClassifyOptions::default());
    assert_eq!(got, "LLLGLLLG");
}

#[test]
fn given_single_line_when_classified_then_only_verse_end_is_heavy() {
    let got = pattern("कककककककक", ClassifyOptions::default());
    assert_eq!(got, "LLLLLLLG");
}

// ── Scenario: empty ─────────────────────────────────────────────────

#[test]
fn given_empty_input_when_classified_then_empty_pattern() {
    assert_eq!(pattern("", ClassifyOptions::default()), "");
}
