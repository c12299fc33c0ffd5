//! # chandas-catalog
//!
//! **Tier 2 (Matching)**
//!
//! The named-meter catalog and everything that consults it: the matcher with
//! its fallback ladder, confidence scoring, and gana notation.
//!
//! ## Example
//!
//! ```
//! use chandas_catalog::{MeterCatalog, MeterMatcher};
//!
//! let catalog = MeterCatalog::standard();
//! let found = MeterMatcher::new(&catalog).find(44, &"GGLGGLLGLLG".repeat(4));
//! assert_eq!(found.name, "Indravajra");
//! assert_eq!(found.confidence(), 0.95);
//! ```

pub mod catalog;
pub mod gana;
pub mod matcher;
pub mod score;

pub use catalog::{CatalogError, MeterCatalog, validate};
pub use gana::gana_pattern;
pub use matcher::{MeterMatch, MeterMatcher};
pub use score::{ConfidenceBand, confidence};
