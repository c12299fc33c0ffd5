#![no_main]

use chandas_core::{explain, identify};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let text = String::from_utf8_lossy(data);

    let result = identify(&text);
    assert_eq!(
        result.weight_pattern.chars().count(),
        result.syllable_breakdown.len()
    );
    assert!((0.0..=1.0).contains(&result.confidence));
    assert_eq!(identify(&text), result);

    let steps = explain(&text, &result);
    assert_eq!(steps.len(), 5);
});
