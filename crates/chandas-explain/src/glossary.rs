//! Prosody term lookup with aliases.

use std::collections::BTreeSet;

struct Entry {
    canonical: &'static str,
    aliases: &'static [&'static str],
    summary: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        canonical: "chandas",
        aliases: &["prosody", "meter", "metre", "vrtta"],
        summary: "Sanskrit prosody; the system of named poetic meters.",
    },
    Entry {
        canonical: "shloka",
        aliases: &["sloka", "verse"],
        summary: "A Sanskrit verse, most often composed in Anushtup.",
    },
    Entry {
        canonical: "akshara",
        aliases: &["syllable", "aksara"],
        summary: "Syllabic unit of Indic script; the atom of metrical analysis.",
    },
    Entry {
        canonical: "laghu",
        aliases: &["light", "short", "l"],
        summary: "Metrically short syllable worth one matra.",
    },
    Entry {
        canonical: "guru",
        aliases: &["heavy", "long", "g"],
        summary: "Metrically long syllable worth two matras: long vowel, conjunct, anusvara or visarga.",
    },
    Entry {
        canonical: "matra",
        aliases: &["mora"],
        summary: "Unit of syllable duration; laghu counts one, guru counts two.",
    },
    Entry {
        canonical: "pada",
        aliases: &["quarter", "line"],
        summary: "One of the (usually four) metrical lines making up a verse.",
    },
    Entry {
        canonical: "gana",
        aliases: &["trisyllable", "foot"],
        summary: "Group of three weights named ya, ma, ta, ra, ja, bha, na, sa.",
    },
    Entry {
        canonical: "danda",
        aliases: &["double_danda", "purna_virama"],
        summary: "Vertical stroke(s) marking the end of a half-verse or verse.",
    },
    Entry {
        canonical: "virama",
        aliases: &["halant", "halanta"],
        summary: "Sign suppressing a consonant's inherent vowel; joins consonants into conjuncts.",
    },
    Entry {
        canonical: "anusvara",
        aliases: &["nasal"],
        summary: "Post-vocalic nasal mark; makes its syllable guru.",
    },
    Entry {
        canonical: "visarga",
        aliases: &["aspiration"],
        summary: "Post-vocalic aspiration mark; makes its syllable guru.",
    },
    Entry {
        canonical: "anushtup",
        aliases: &["anustubh", "anushtubh"],
        summary: "Four quarters of eight syllables with largely free weights; the epic meter.",
    },
];

fn normalize(key: &str) -> String {
    key.trim()
        .to_ascii_lowercase()
        .replace([' ', '-', '.'], "_")
}

/// Explain a prosody term, matching canonical names and aliases.
pub fn lookup(key: &str) -> Option<String> {
    let wanted = normalize(key);
    for entry in ENTRIES {
        if normalize(entry.canonical) == wanted
            || entry.aliases.iter().any(|a| normalize(a) == wanted)
        {
            return Some(format!("{}: {}", entry.canonical, entry.summary));
        }
    }
    None
}

/// Sorted list of every canonical term.
pub fn terms() -> String {
    let keys: BTreeSet<&'static str> = ENTRIES.iter().map(|e| e.canonical).collect();
    let mut out = String::from("Available prosody terms:\n");
    for key in keys {
        out.push_str("- ");
        out.push_str(key);
        out.push('\n');
    }
    out
}
