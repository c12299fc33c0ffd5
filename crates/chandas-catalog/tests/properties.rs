use chandas_catalog::{ConfidenceBand, MeterCatalog, MeterMatcher, confidence, gana_pattern};
use chandas_types::{MatchKind, WeightPattern};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matcher_is_deterministic(pattern in "[LG]{0,90}") {
        let catalog = MeterCatalog::standard();
        let matcher = MeterMatcher::new(&catalog);
        let count = pattern.len();
        prop_assert_eq!(matcher.find(count, &pattern), matcher.find(count, &pattern));
    }

    #[test]
    fn confidence_is_bounded_and_tied_to_kind(pattern in "[LG]{0,90}") {
        let catalog = MeterCatalog::standard();
        let found = MeterMatcher::new(&catalog).find(pattern.len(), &pattern);
        let c = found.confidence();
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert_eq!(c, confidence(found.kind));
        prop_assert_eq!(found.detected(), found.kind != MatchKind::Unknown);
    }

    #[test]
    fn non_multiple_of_four_without_template_is_unknown(n in 1usize..200) {
        prop_assume!(n % 4 != 0);
        let catalog = MeterCatalog::standard();
        let found = MeterMatcher::new(&catalog).find(n, &"L".repeat(n));
        prop_assert_eq!(found.name, "Unknown");
    }

    #[test]
    fn band_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let rank = |band: ConfidenceBand| match band {
            ConfidenceBand::Low => 0,
            ConfidenceBand::Partial => 1,
            ConfidenceBand::Strong => 2,
            ConfidenceBand::Exact => 3,
        };
        if a <= b {
            prop_assert!(rank(ConfidenceBand::of(a)) <= rank(ConfidenceBand::of(b)));
        }
    }

    #[test]
    fn gana_quarters_match_width(raw in "[LG]{1,80}", width in 1usize..20) {
        let pattern: WeightPattern = raw.parse().unwrap();
        let notation = gana_pattern(&pattern, width).unwrap();
        let quarters = notation.split(" | ").count();
        prop_assert_eq!(quarters, raw.len().div_ceil(width));
    }
}
