//! # chandas-explain
//!
//! Human-facing narration of an identification and a small glossary of
//! prosody terms.
//!
//! The narration is derived from an existing result and the raw text only;
//! it performs no analysis of its own.

pub mod glossary;
pub mod trace;

pub use glossary::{lookup, terms};
pub use trace::{TraceOptions, trace};
