//! The ordered meter catalog.
//!
//! Catalog order is match priority: the matcher walks templates top to bottom
//! and the first acceptable one wins. The six classical meters every caller
//! relies on come first; the wider sama-vṛtta set follows them.

use chandas_types::{MeterTemplate, Weight, WeightPattern};
use thiserror::Error;

/// Why a template was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("meter name must not be empty")]
    EmptyName,

    #[error("meter '{name}': syllables per quarter must be positive")]
    ZeroQuarter { name: String },

    #[error(
        "meter '{name}': {total} syllables is not a whole number of {per_quarter}-syllable quarters"
    )]
    UnevenQuarters {
        name: String,
        total: usize,
        per_quarter: usize,
    },

    #[error("meter '{name}': fixed pattern has {actual} syllables, expected {expected}")]
    PatternLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("meter '{name}' is already in the catalog")]
    Duplicate { name: String },

    #[error("meter '{name}': four quarters of {per_quarter} syllables overflow")]
    QuarterOverflow { name: String, per_quarter: usize },
}

/// Read-only, ordered list of meter templates.
///
/// Build it once and share it; nothing mutates a catalog after construction
/// except explicit [`MeterCatalog::push`] calls by its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterCatalog {
    templates: Vec<MeterTemplate>,
}

impl MeterCatalog {
    /// Build a catalog from templates, validating each in order.
    pub fn new(templates: Vec<MeterTemplate>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            templates: Vec::with_capacity(templates.len()),
        };
        for template in templates {
            catalog.push(template)?;
        }
        Ok(catalog)
    }

    /// The built-in catalog.
    pub fn standard() -> Self {
        Self {
            templates: standard_templates(),
        }
    }

    /// Append a template at the lowest priority.
    pub fn push(&mut self, template: MeterTemplate) -> Result<(), CatalogError> {
        validate(&template)?;
        if self.get(&template.name).is_some() {
            return Err(CatalogError::Duplicate {
                name: template.name,
            });
        }
        self.templates.push(template);
        Ok(())
    }

    pub fn templates(&self) -> &[MeterTemplate] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeterTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&MeterTemplate> {
        let wanted = name.trim().to_lowercase();
        self.templates
            .iter()
            .find(|t| t.name.to_lowercase() == wanted)
    }
}

impl Default for MeterCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a MeterCatalog {
    type Item = &'a MeterTemplate;
    type IntoIter = std::slice::Iter<'a, MeterTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

/// Check a template's internal consistency.
pub fn validate(template: &MeterTemplate) -> Result<(), CatalogError> {
    let name = template.name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if template.syllables_per_quarter == 0 {
        return Err(CatalogError::ZeroQuarter { name: name.into() });
    }
    if template.total_syllables == 0
        || template.total_syllables % template.syllables_per_quarter != 0
    {
        return Err(CatalogError::UnevenQuarters {
            name: name.into(),
            total: template.total_syllables,
            per_quarter: template.syllables_per_quarter,
        });
    }
    if let Some(pattern) = &template.fixed_pattern
        && pattern.len() != template.syllables_per_quarter
    {
        return Err(CatalogError::PatternLength {
            name: name.into(),
            expected: template.syllables_per_quarter,
            actual: pattern.len(),
        });
    }
    Ok(())
}

fn quarter(symbols: &str) -> WeightPattern {
    WeightPattern::new(symbols.chars().filter_map(Weight::from_symbol).collect())
}

fn template(
    name: &str,
    per_quarter: usize,
    pattern: Option<&str>,
    description: &str,
) -> MeterTemplate {
    MeterTemplate {
        name: name.to_string(),
        total_syllables: per_quarter * 4,
        syllables_per_quarter: per_quarter,
        fixed_pattern: pattern.map(quarter),
        description: description.to_string(),
    }
}

fn standard_templates() -> Vec<MeterTemplate> {
    vec![
        template(
            "Anushtup",
            8,
            None,
            "Most common meter of epic and shloka verse: 8 syllables per quarter, weights largely free",
        ),
        template(
            "Indravajra",
            11,
            Some("GGLGGLLGLLG"),
            "11 syllables per quarter in a fixed guru-led pattern",
        ),
        template(
            "Upendravajra",
            11,
            Some("LGLGGLLGLLG"),
            "11 syllables per quarter; Indravajra with a light opening syllable",
        ),
        template(
            "Vasantatilaka",
            14,
            Some("GGLGLLLGLLGLGG"),
            "14 syllables per quarter (ta bha ja ja ga ga), the spring-ornament meter",
        ),
        template(
            "Malini",
            15,
            Some("LLLLLLGGGLGGLGG"),
            "15 syllables per quarter (na na ma ya ya), caesura after the eighth",
        ),
        template(
            "Shardula-vikridita",
            19,
            Some("GGGLLGLGLLLGGGLGGLG"),
            "19 syllables per quarter (ma sa ja sa ta ta ga), the tiger's-play meter",
        ),
        template(
            "Shalini",
            11,
            Some("GGGGGLGGLGG"),
            "11 syllables per quarter (ma ta ta ga ga)",
        ),
        template(
            "Rathoddhata",
            11,
            Some("GLGLLLGLGLG"),
            "11 syllables per quarter (ra na ra la ga)",
        ),
        template(
            "Vamshastha",
            12,
            Some("LGLGGLLGLGLG"),
            "12 syllables per quarter (ja ta ja ra)",
        ),
        template(
            "Bhujangaprayata",
            12,
            Some("LGGLGGLGGLGG"),
            "12 syllables per quarter, four ya-ganas: the serpent's gait",
        ),
        template(
            "Drutavilambita",
            12,
            Some("LLLGLLGLLGLG"),
            "12 syllables per quarter (na bha bha ra)",
        ),
        template(
            "Mandakranta",
            17,
            Some("GGGGLLLLLGGLGGLGG"),
            "17 syllables per quarter (ma bha na ta ta ga ga), the slow-stepping meter",
        ),
        template(
            "Shikharini",
            17,
            Some("LGGGGGLLLLLGGLLLG"),
            "17 syllables per quarter (ya ma na sa bha la ga)",
        ),
        template(
            "Sragdhara",
            21,
            Some("GGGGLGGLLLLLLGGLGGLGG"),
            "21 syllables per quarter (ma ra bha na ya ya ya)",
        ),
    ]
}
