//! FFI-friendly JSON entrypoint for language bindings.
//!
//! This module provides a single `run_json` function that accepts
//! a mode string and JSON arguments, returning a JSON result.
//!
//! ## Response Envelope
//!
//! All responses use a consistent envelope format:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Missing or null keys use defaults
//! - Values of the wrong type return errors (no silent fallback to defaults)

use std::borrow::Cow;

use serde_json::{Value, json};

use crate::Analyzer;
use crate::error::{ChandasError, ResponseEnvelope};
use chandas_settings::AnalysisSettings;

/// Run a chandas operation with JSON arguments, returning JSON output.
///
/// # Arguments
///
/// * `mode` - The operation mode: "identify", "explain", "catalog", "version"
/// * `args_json` - JSON object with the arguments
///
/// # Fields
///
/// `identify` and `explain` read `text` (string, default `""`) and
/// `line_end_forces_heavy` (bool, default `true`). `explain` also reads
/// `preview_chars` and `sample_syllables`.
///
/// # Example
///
/// ```
/// use chandas_core::ffi::run_json;
///
/// let out = run_json("identify", r#"{"text": ""}"#);
/// assert!(out.starts_with(r#"{"ok":true"#));
/// assert!(out.contains(r#""meter_name":"Unknown""#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, ChandasError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !(args.is_object() || args.is_null()) {
        return Err(ChandasError::new(
            crate::error::ErrorCode::InvalidSettings,
            "Arguments must be a JSON object",
        ));
    }

    match mode {
        "identify" => {
            let text = parse_string(&args, "text", "")?;
            let analyzer = analyzer_for(&args)?;
            let result = analyzer.identify(&text);
            serde_json::to_value(&result).map_err(ChandasError::internal)
        }
        "explain" => {
            let text = parse_string(&args, "text", "")?;
            let analyzer = analyzer_for(&args)?;
            let result = analyzer.identify(&text);
            let steps = analyzer.explain(&text, &result);
            Ok(json!({
                "result": serde_json::to_value(&result).map_err(ChandasError::internal)?,
                "steps": serde_json::to_value(&steps).map_err(ChandasError::internal)?,
            }))
        }
        "catalog" => {
            let analyzer = Analyzer::standard();
            Ok(json!({
                "meters": serde_json::to_value(analyzer.catalog().templates())
                    .map_err(ChandasError::internal)?,
            }))
        }
        "version" => Ok(json!({
            "version": version(),
            "schema_version": schema_version(),
        })),
        _ => Err(ChandasError::unknown_mode(mode)),
    }
}

/// Default settings reuse the shared analyzer; anything else builds one.
fn analyzer_for(args: &Value) -> Result<Cow<'static, Analyzer>, ChandasError> {
    let defaults = AnalysisSettings::default();
    let settings = AnalysisSettings {
        line_end_forces_heavy: parse_bool(
            args,
            "line_end_forces_heavy",
            defaults.line_end_forces_heavy,
        )?,
        preview_chars: parse_usize(args, "preview_chars", defaults.preview_chars)?,
        sample_syllables: parse_usize(args, "sample_syllables", defaults.sample_syllables)?,
        meters: Vec::new(),
    };
    if settings == defaults {
        return Ok(Cow::Borrowed(Analyzer::standard()));
    }
    Analyzer::with_settings(settings)
        .map(Cow::Owned)
        .map_err(ChandasError::internal)
}

/// Crate version, as built.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version of the result JSON shape.
pub fn schema_version() -> u32 {
    chandas_types::SCHEMA_VERSION
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

/// Parse a boolean field strictly: missing/null -> default, non-bool -> error.
fn parse_bool(args: &Value, field: &str, default: bool) -> Result<bool, ChandasError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| ChandasError::invalid_field(field, "a boolean (true or false)")),
    }
}

/// Parse a usize field strictly: missing/null -> default, non-number -> error.
fn parse_usize(args: &Value, field: &str, default: usize) -> Result<usize, ChandasError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| ChandasError::invalid_field(field, "a non-negative integer")),
    }
}

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, ChandasError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ChandasError::invalid_field(field, "a string")),
    }
}
