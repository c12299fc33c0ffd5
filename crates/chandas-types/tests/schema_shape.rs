//! JSON shape checks: downstream services serialize these structs verbatim.

use chandas_types::{
    IdentificationResult, IdentificationStep, MatchKind, MeterTemplate, Syllable, Weight,
};
use serde_json::json;

fn sample_result() -> IdentificationResult {
    IdentificationResult {
        meter_name: "Anushtup (single quarter detected)".into(),
        syllable_breakdown: vec![Syllable {
            text: "धर्".into(),
            weight: Weight::Heavy,
            position: 1,
        }],
        weight_pattern: "G".into(),
        explanation: "8 syllables".into(),
        confidence: 0.75,
        detected: true,
        match_kind: MatchKind::SingleQuarter,
        syllable_count_per_quarter: None,
        gana_pattern: Some("ga".into()),
    }
}

#[test]
fn result_uses_snake_case_fields() {
    let value = serde_json::to_value(sample_result()).unwrap();
    assert_eq!(value["meter_name"], json!("Anushtup (single quarter detected)"));
    assert_eq!(value["weight_pattern"], json!("G"));
    assert_eq!(value["match_kind"], json!("single_quarter"));
    assert_eq!(value["syllable_breakdown"][0]["weight"], json!("G"));
    assert_eq!(value["syllable_breakdown"][0]["position"], json!(1));
    assert_eq!(value["gana_pattern"], json!("ga"));
}

#[test]
fn absent_optionals_are_omitted() {
    let value = serde_json::to_value(sample_result()).unwrap();
    assert!(value.get("syllable_count_per_quarter").is_none());
}

#[test]
fn result_deserializes_without_optionals() {
    let mut value = serde_json::to_value(sample_result()).unwrap();
    value.as_object_mut().unwrap().remove("gana_pattern");
    let back: IdentificationResult = serde_json::from_value(value).unwrap();
    assert_eq!(back.gana_pattern, None);
    assert_eq!(back.syllable_count(), 1);
}

#[test]
fn template_pattern_serializes_as_string() {
    let t = MeterTemplate {
        name: "Indravajra".into(),
        total_syllables: 44,
        syllables_per_quarter: 11,
        fixed_pattern: Some("GGLGGLLGLLG".parse().unwrap()),
        description: String::new(),
    };
    let value = serde_json::to_value(&t).unwrap();
    assert_eq!(value["fixed_pattern"], json!("GGLGGLLGLLG"));
    assert_eq!(t.quarters(), 4);
}

#[test]
fn template_with_bad_pattern_fails_to_deserialize() {
    let raw = json!({
        "name": "x",
        "total_syllables": 4,
        "syllables_per_quarter": 1,
        "fixed_pattern": "Q"
    });
    assert!(serde_json::from_value::<MeterTemplate>(raw).is_err());
}

#[test]
fn step_fields_are_stable() {
    let step = IdentificationStep {
        step_number: 1,
        step_name: "Text Preprocessing".into(),
        description: "d".into(),
        result: "r".into(),
    };
    let value = serde_json::to_value(step).unwrap();
    assert_eq!(value["step_number"], json!(1));
    assert_eq!(value["step_name"], json!("Text Preprocessing"));
}
