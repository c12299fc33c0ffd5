//! # chandas-segment
//!
//! **Tier 1 (Text)**
//!
//! Turns raw verse text into aksharas, the atomic units of metrical analysis.
//!
//! * [`normalize`] strips dandas and whitespace into one contiguous string.
//! * [`segment`] scans normalized Devanagari left to right and emits aksharas.
//! * [`split_lines`] keeps the line structure that normalization discards, for
//!   callers that need per-quarter counts or line-end positions.
//!
//! Every function here is total: any UTF-8 input produces a value, and
//! characters outside the handled Devanagari classes are skipped.

pub mod script;

use script::{
    is_anusvara_or_visarga, is_consonant, is_danda, is_dependent_vowel, is_independent_vowel,
    is_nukta, is_virama,
};

/// One segmented syllabic unit, before weighing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Akshara {
    pub text: String,
    /// 1-based rank in emission order.
    pub position: usize,
}

/// Remove whitespace, newlines, danda and double danda.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !is_danda(*c))
        .collect()
}

/// Split raw verse text on dandas and line breaks.
///
/// Segments are trimmed; empty segments are dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(|c: char| is_danda(c) || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Segment normalized text into aksharas.
///
/// Rules, applied at each scan position:
/// 1. an independent vowel is a unit of its own;
/// 2. a consonant opens a unit and greedily takes virama+consonant pairs;
///    a virama with no consonant after it closes the unit;
/// 3. otherwise one dependent vowel sign may follow;
/// 4. one trailing anusvara or visarga may follow either kind of unit;
/// 5. anything else is skipped.
pub fn segment(text: &str) -> Vec<Akshara> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let mut unit = String::new();

        if is_independent_vowel(c) {
            unit.push(c);
            i += 1;
        } else if is_consonant(c) {
            unit.push(c);
            i += 1;
            i = take_nukta(&chars, i, &mut unit);

            while i + 1 < chars.len() && is_virama(chars[i]) && is_consonant(chars[i + 1]) {
                unit.push(chars[i]);
                unit.push(chars[i + 1]);
                i += 2;
                i = take_nukta(&chars, i, &mut unit);
            }

            if i < chars.len() && (is_virama(chars[i]) || is_dependent_vowel(chars[i])) {
                unit.push(chars[i]);
                i += 1;
            }
        } else {
            i += 1;
            continue;
        }

        if i < chars.len() && is_anusvara_or_visarga(chars[i]) {
            unit.push(chars[i]);
            i += 1;
        }

        out.push(Akshara {
            text: unit,
            position: out.len() + 1,
        });
    }

    out
}

/// Normalize then segment.
pub fn segment_verse(raw: &str) -> Vec<Akshara> {
    segment(&normalize(raw))
}

/// Syllable count of every non-empty line, in order.
///
/// Lines that hold no Devanagari syllables (verse numbers, stray Latin) are
/// left out.
pub fn line_syllable_counts(raw: &str) -> Vec<usize> {
    split_lines(raw)
        .into_iter()
        .map(|line| segment_verse(line).len())
        .filter(|count| *count > 0)
        .collect()
}

fn take_nukta(chars: &[char], i: usize, unit: &mut String) -> usize {
    if i < chars.len() && is_nukta(chars[i]) {
        unit.push(chars[i]);
        i + 1
    } else {
        i
    }
}
