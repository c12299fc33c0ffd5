#![no_main]

use chandas_segment::{line_syllable_counts, normalize, segment, segment_verse};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let text = String::from_utf8_lossy(data);

    let cleaned = normalize(&text);
    assert!(!cleaned.chars().any(char::is_whitespace));
    assert_eq!(normalize(&cleaned), cleaned);

    let units = segment_verse(&text);
    assert_eq!(units, segment(&cleaned));
    for (i, unit) in units.iter().enumerate() {
        assert_eq!(unit.position, i + 1);
        assert!(!unit.text.is_empty());
    }

    assert!(!line_syllable_counts(&text).contains(&0));
});
