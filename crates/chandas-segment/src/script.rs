//! Devanagari character classes used by segmentation and weighing.

/// `।`
pub const DANDA: char = '\u{0964}';
/// `॥`
pub const DOUBLE_DANDA: char = '\u{0965}';
/// `्`
pub const VIRAMA: char = '\u{094D}';
/// `़`
pub const NUKTA: char = '\u{093C}';
/// `ं`
pub const ANUSVARA: char = '\u{0902}';
/// `ः`
pub const VISARGA: char = '\u{0903}';

/// Independent vowels: अ … औ, plus vocalic ॠ and ॡ.
pub fn is_independent_vowel(c: char) -> bool {
    matches!(c, '\u{0904}'..='\u{0914}' | '\u{0960}' | '\u{0961}')
}

/// Consonants क … ह and the precomposed nukta forms क़ … य़.
pub fn is_consonant(c: char) -> bool {
    matches!(c, '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}')
}

/// Dependent vowel signs ा … ौ and the vocalic ॢ ॣ.
///
/// The virama sits inside the ा…ौ block's neighbourhood but is not a vowel sign.
pub fn is_dependent_vowel(c: char) -> bool {
    matches!(c, '\u{093E}'..='\u{094C}' | '\u{0962}' | '\u{0963}')
}

pub fn is_virama(c: char) -> bool {
    c == VIRAMA
}

pub fn is_nukta(c: char) -> bool {
    c == NUKTA
}

pub fn is_anusvara_or_visarga(c: char) -> bool {
    c == ANUSVARA || c == VISARGA
}

/// Verse separators removed during normalization.
pub fn is_danda(c: char) -> bool {
    c == DANDA || c == DOUBLE_DANDA
}

/// Long vowels, independent or dependent: आ ई ऊ ॠ ॡ ए ऐ ओ औ and their signs.
pub fn is_long_vowel(c: char) -> bool {
    matches!(
        c,
        '\u{0906}' // आ
            | '\u{0908}' // ई
            | '\u{090A}' // ऊ
            | '\u{090F}' // ए
            | '\u{0910}' // ऐ
            | '\u{0913}' // ओ
            | '\u{0914}' // औ
            | '\u{0960}' // ॠ
            | '\u{0961}' // ॡ
            | '\u{093E}' // ा
            | '\u{0940}' // ी
            | '\u{0942}' // ू
            | '\u{0944}' // ॄ
            | '\u{0947}' // े
            | '\u{0948}' // ै
            | '\u{094B}' // ो
            | '\u{094C}' // ौ
            | '\u{0963}' // ॣ
    )
}
