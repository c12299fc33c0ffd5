//! # chandas-core
//!
//! This crate is the **primary library interface** for `chandas`.
//! It runs normalization, segmentation, weighing, matching and scoring
//! over one verse and returns a fully populated [`IdentificationResult`].
//!
//! If you are embedding `chandas` into another Rust application, depend on
//! this crate and `chandas-types`. Avoid depending on the stage crates
//! (`chandas-segment`, `chandas-weight`, ...) directly unless necessary.
//!
//! ## Example
//!
//! ```rust
//! use chandas_core::{explain, identify};
//!
//! let verse = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।\n\
//!              मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय ॥";
//! let result = identify(verse);
//! assert_eq!(result.meter_name, "Anushtup");
//! assert_eq!(result.syllable_count(), 32);
//!
//! let steps = explain(verse, &result);
//! assert_eq!(steps.len(), 5);
//! ```
//!
//! Identification never fails: empty or non-Devanagari input yields an
//! `"Unknown"` result with confidence 0.30.

pub mod error;
pub mod ffi;

use std::sync::{Arc, LazyLock};

use chandas_catalog::{CatalogError, MeterCatalog, MeterMatcher, gana_pattern};
use chandas_explain::TraceOptions;
use chandas_segment::{line_syllable_counts, segment_verse};
use chandas_settings::AnalysisSettings;
use chandas_types::{IdentificationResult, IdentificationStep};
use chandas_weight::{ClassifyOptions, classify, line_end_positions, pattern_of};
use tracing::{debug, warn};

// Re-export types for convenience
pub use chandas_settings as settings;
pub use chandas_types as types;

static STANDARD_CATALOG: LazyLock<Arc<MeterCatalog>> =
    LazyLock::new(|| Arc::new(MeterCatalog::standard()));

static STANDARD: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

/// Owns a meter catalog and the settings every call runs with.
///
/// Immutable after construction; share one across threads freely. Analyzers
/// without custom meters share one built-in catalog.
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Arc<MeterCatalog>,
    settings: AnalysisSettings,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Standard catalog, default settings.
    pub fn new() -> Self {
        Self {
            catalog: Arc::clone(&STANDARD_CATALOG),
            settings: AnalysisSettings::default(),
        }
    }

    /// The process-wide analyzer with the standard catalog and default settings.
    pub fn standard() -> &'static Analyzer {
        &STANDARD
    }

    /// Standard catalog with `settings.meters` appended in order.
    ///
    /// Fails on the first custom meter the catalog refuses.
    pub fn with_settings(settings: AnalysisSettings) -> Result<Self, CatalogError> {
        if settings.meters.is_empty() {
            return Ok(Self {
                catalog: Arc::clone(&STANDARD_CATALOG),
                settings,
            });
        }

        let mut catalog = MeterCatalog::clone(&STANDARD_CATALOG);
        for spec in &settings.meters {
            let pushed = match spec.to_template() {
                Some(template) => catalog.push(template),
                None => Err(CatalogError::QuarterOverflow {
                    name: spec.name.clone(),
                    per_quarter: spec.syllables_per_quarter,
                }),
            };
            if let Err(err) = pushed {
                warn!(meter = %spec.name, error = %err, "rejected custom meter");
                return Err(err);
            }
        }
        debug!(
            meters = catalog.len(),
            custom = settings.meters.len(),
            "catalog ready"
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            settings,
        })
    }

    pub fn catalog(&self) -> &MeterCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Identify the meter of `text`. Total and deterministic.
    pub fn identify(&self, text: &str) -> IdentificationResult {
        let aksharas = segment_verse(text);
        let total = aksharas.len();
        let line_counts = line_syllable_counts(text);
        let line_ends = line_end_positions(total, &line_counts);

        let syllables = classify(&aksharas, &line_ends, self.classify_options());
        let pattern = pattern_of(&syllables);
        let weight_pattern = pattern.to_string();

        let verdict = MeterMatcher::new(&self.catalog).find(total, &weight_pattern);
        let per_quarter = quarter_counts(total, &line_counts, verdict.syllables_per_quarter);
        let ganas = verdict
            .syllables_per_quarter
            .and_then(|width| gana_pattern(&pattern, width));

        debug!(
            syllables = total,
            lines = line_counts.len(),
            pattern = %weight_pattern,
            meter = %verdict.name,
            kind = %verdict.kind,
            confidence = verdict.confidence(),
            "identified verse"
        );

        IdentificationResult {
            confidence: verdict.confidence(),
            detected: verdict.detected(),
            match_kind: verdict.kind,
            meter_name: verdict.name,
            syllable_breakdown: syllables,
            weight_pattern,
            explanation: verdict.explanation,
            syllable_count_per_quarter: per_quarter,
            gana_pattern: ganas,
        }
    }

    /// Narrate how `result` was reached for `text`, in five steps.
    pub fn explain(&self, text: &str, result: &IdentificationResult) -> Vec<IdentificationStep> {
        chandas_explain::trace(text, result, &self.catalog, self.trace_options())
    }

    fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            line_end_forces_heavy: self.settings.line_end_forces_heavy,
        }
    }

    fn trace_options(&self) -> TraceOptions {
        TraceOptions {
            preview_chars: self.settings.preview_chars,
            sample_syllables: self.settings.sample_syllables,
        }
    }
}

/// Identify with the standard catalog and default settings.
pub fn identify(text: &str) -> IdentificationResult {
    STANDARD.identify(text)
}

/// Explain with the standard catalog and default settings.
pub fn explain(text: &str, result: &IdentificationResult) -> Vec<IdentificationStep> {
    STANDARD.explain(text, result)
}

/// Syllables per quarter.
///
/// Raw line counts win when there are at least two lines and they account
/// for every syllable; otherwise the total is chunked by the matched width.
fn quarter_counts(total: usize, line_counts: &[usize], width: Option<usize>) -> Option<Vec<usize>> {
    if line_counts.len() >= 2 && line_counts.iter().sum::<usize>() == total {
        return Some(line_counts.to_vec());
    }
    let width = width.filter(|w| *w > 0)?;
    if total == 0 {
        return None;
    }
    let mut counts = vec![width; total / width];
    if total % width != 0 {
        counts.push(total % width);
    }
    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_counts_prefers_lines() {
        assert_eq!(quarter_counts(32, &[16, 16], Some(8)), Some(vec![16, 16]));
    }

    #[test]
    fn quarter_counts_chunks_by_width() {
        assert_eq!(quarter_counts(32, &[32], Some(8)), Some(vec![8, 8, 8, 8]));
        assert_eq!(quarter_counts(10, &[10], Some(4)), Some(vec![4, 4, 2]));
    }

    #[test]
    fn quarter_counts_absent_without_width() {
        assert_eq!(quarter_counts(7, &[7], None), None);
        assert_eq!(quarter_counts(0, &[], Some(8)), None);
    }

    #[test]
    fn custom_meter_is_appended_last() {
        let mut settings = AnalysisSettings::default();
        settings.meters.push(chandas_settings::MeterSpec {
            name: "Pramanika".into(),
            syllables_per_quarter: 8,
            total_syllables: None,
            pattern: Some("LGLGLGLG".parse().expect("pattern")),
            description: String::new(),
        });
        let analyzer = Analyzer::with_settings(settings).expect("valid meter");
        let last = analyzer.catalog().templates().last().expect("non-empty");
        assert_eq!(last.name, "Pramanika");
    }

    #[test]
    fn duplicate_custom_meter_is_refused() {
        let mut settings = AnalysisSettings::default();
        settings.meters.push(chandas_settings::MeterSpec {
            name: "MALINI".into(),
            syllables_per_quarter: 15,
            total_syllables: None,
            pattern: None,
            description: String::new(),
        });
        let err = Analyzer::with_settings(settings).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { .. }));
    }

    #[test]
    fn analyzers_without_custom_meters_share_one_catalog() {
        let plain = Analyzer::new();
        let tuned = Analyzer::with_settings(AnalysisSettings {
            line_end_forces_heavy: false,
            ..AnalysisSettings::default()
        })
        .expect("no custom meters");
        assert!(std::ptr::eq(plain.catalog(), tuned.catalog()));
        assert!(std::ptr::eq(plain.catalog(), Analyzer::standard().catalog()));
    }

    #[test]
    fn custom_meters_do_not_touch_the_shared_catalog() {
        let mut settings = AnalysisSettings::default();
        settings.meters.push(chandas_settings::MeterSpec {
            name: "Pramanika".into(),
            syllables_per_quarter: 8,
            total_syllables: None,
            pattern: None,
            description: String::new(),
        });
        let custom = Analyzer::with_settings(settings).expect("valid meter");
        assert_eq!(custom.catalog().len(), Analyzer::new().catalog().len() + 1);
        assert!(Analyzer::standard().catalog().get("Pramanika").is_none());
    }

    #[test]
    fn oversized_quarter_is_refused_not_panicking() {
        let mut settings = AnalysisSettings::default();
        settings.meters.push(chandas_settings::MeterSpec {
            name: "Huge".into(),
            syllables_per_quarter: usize::MAX / 2,
            total_syllables: None,
            pattern: None,
            description: String::new(),
        });
        let err = Analyzer::with_settings(settings).unwrap_err();
        assert_eq!(
            err,
            CatalogError::QuarterOverflow {
                name: "Huge".into(),
                per_quarter: usize::MAX / 2,
            }
        );
    }
}
