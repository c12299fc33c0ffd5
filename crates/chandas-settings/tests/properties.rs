//! Property tests for chandas-settings.

use chandas_settings::AnalysisSettings;
use proptest::prelude::*;

proptest! {
    #[test]
    fn json_round_trip_preserves_scalars(
        heavy in any::<bool>(),
        preview in 0usize..500,
        sample in 0usize..50,
    ) {
        let s = AnalysisSettings {
            line_end_forces_heavy: heavy,
            preview_chars: preview,
            sample_syllables: sample,
            meters: Vec::new(),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: AnalysisSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, s);
    }
}
