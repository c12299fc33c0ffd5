//! Trisyllabic gana notation.
//!
//! Each run of three weights maps to one of the eight classical ganas; any
//! one or two weights left over at the end of a quarter are written as
//! `la` / `ga`.

use chandas_types::{Weight, WeightPattern};

use Weight::{Heavy as G, Light as L};

fn gana_name(triple: &[Weight]) -> &'static str {
    match triple {
        [L, G, G] => "ya",
        [G, G, G] => "ma",
        [G, G, L] => "ta",
        [G, L, G] => "ra",
        [L, G, L] => "ja",
        [G, L, L] => "bha",
        [L, L, L] => "na",
        [L, L, G] => "sa",
        _ => "",
    }
}

/// Gana names for one run of weights, space separated.
pub fn notation(weights: &[Weight]) -> String {
    let mut parts: Vec<&'static str> = Vec::new();
    let mut chunks = weights.chunks_exact(3);
    for triple in &mut chunks {
        parts.push(gana_name(triple));
    }
    for w in chunks.remainder() {
        parts.push(match w {
            Weight::Light => "la",
            Weight::Heavy => "ga",
        });
    }
    parts.join(" ")
}

/// Gana notation per quarter, quarters separated by ` | `.
///
/// `None` when the pattern is empty or the quarter width is unknown.
pub fn gana_pattern(pattern: &WeightPattern, per_quarter: usize) -> Option<String> {
    if pattern.is_empty() || per_quarter == 0 {
        return None;
    }
    Some(
        pattern
            .weights()
            .chunks(per_quarter)
            .map(notation)
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> WeightPattern {
        s.parse().expect("valid pattern")
    }

    #[test]
    fn all_eight_ganas() {
        assert_eq!(
            notation(p("LGGGGGGGLGLGLGLGLLLLLLLG").weights()),
            "ya ma ta ra ja bha na sa"
        );
    }

    #[test]
    fn leftovers_are_la_and_ga() {
        assert_eq!(notation(p("GGLGGLLGLGG").weights()), "ta ta ja ga ga");
        assert_eq!(notation(p("L").weights()), "la");
    }

    #[test]
    fn quarters_are_separated() {
        assert_eq!(
            gana_pattern(&p("LLLGLLLG"), 4).as_deref(),
            Some("na ga | na ga")
        );
        assert_eq!(gana_pattern(&p(""), 4), None);
        assert_eq!(gana_pattern(&p("LG"), 0), None);
    }
}
