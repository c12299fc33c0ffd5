//! Text, Markdown and JSON rendering of results.

use std::fmt::Write;

use anyhow::Result;
use chandas_config::OutputFormat;
use chandas_types::{IdentificationResult, IdentificationStep, MeterTemplate};
use serde::Serialize;

#[derive(Serialize)]
struct Explained<'a> {
    result: &'a IdentificationResult,
    steps: &'a [IdentificationStep],
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn counts(result: &IdentificationResult) -> String {
    match &result.syllable_count_per_quarter {
        Some(q) if q.len() > 1 => format!(
            "{} ({})",
            result.syllable_count(),
            q.iter().map(usize::to_string).collect::<Vec<_>>().join(" + ")
        ),
        _ => result.syllable_count().to_string(),
    }
}

pub(crate) fn result(result: &IdentificationResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => result_text(result),
        OutputFormat::Md => result_md(result),
    })
}

pub(crate) fn explained(
    result: &IdentificationResult,
    steps: &[IdentificationStep],
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&Explained { result, steps })?,
        OutputFormat::Text => format!("{}\n{}", result_text(result), steps_text(steps)),
        OutputFormat::Md => format!("{}\n{}", result_md(result), steps_md(steps)),
    })
}

fn result_text(r: &IdentificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Meter:       {}", r.meter_name);
    let _ = writeln!(out, "Detected:    {}", yes_no(r.detected));
    let _ = writeln!(out, "Confidence:  {:.2}", r.confidence);
    let _ = writeln!(out, "Syllables:   {}", counts(r));
    if !r.weight_pattern.is_empty() {
        let _ = writeln!(out, "Pattern:     {}", r.weight_pattern);
    }
    if let Some(ganas) = &r.gana_pattern {
        let _ = writeln!(out, "Ganas:       {ganas}");
    }
    let _ = writeln!(out, "Explanation: {}", r.explanation);
    if !r.syllable_breakdown.is_empty() {
        let units: Vec<String> = r
            .syllable_breakdown
            .iter()
            .map(|s| format!("{}({})", s.text, s.weight))
            .collect();
        let _ = writeln!(out, "Breakdown:   {}", units.join(" "));
    }
    out
}

fn result_md(r: &IdentificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}\n", r.meter_name);
    out.push_str("| Field | Value |\n|---|---|\n");
    let _ = writeln!(out, "| Detected | {} |", yes_no(r.detected));
    let _ = writeln!(out, "| Confidence | {:.2} |", r.confidence);
    let _ = writeln!(out, "| Match | {} |", r.match_kind);
    let _ = writeln!(out, "| Syllables | {} |", counts(r));
    if !r.weight_pattern.is_empty() {
        let _ = writeln!(out, "| Pattern | `{}` |", r.weight_pattern);
    }
    if let Some(ganas) = &r.gana_pattern {
        let _ = writeln!(out, "| Ganas | {ganas} |");
    }
    let _ = writeln!(out, "\n{}", r.explanation);
    if !r.syllable_breakdown.is_empty() {
        out.push_str("\n| # | Syllable | Weight |\n|---:|---|---|\n");
        for s in &r.syllable_breakdown {
            let _ = writeln!(out, "| {} | {} | {} |", s.position, s.text, s.weight);
        }
    }
    out
}

fn steps_text(steps: &[IdentificationStep]) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(out, "Step {}: {}", step.step_number, step.step_name);
        for line in step.description.lines() {
            let _ = writeln!(out, "  {line}");
        }
        for line in step.result.lines() {
            let _ = writeln!(out, "  => {line}");
        }
        out.push('\n');
    }
    out
}

fn steps_md(steps: &[IdentificationStep]) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(out, "### Step {}: {}\n", step.step_number, step.step_name);
        let _ = writeln!(out, "{}\n", step.description);
        let _ = writeln!(out, "```text\n{}\n```\n", step.result);
    }
    out
}

pub(crate) fn catalog(templates: &[MeterTemplate], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(templates)?,
        OutputFormat::Text => {
            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(4);
            let mut out = String::new();
            for (i, t) in templates.iter().enumerate() {
                let pattern = t
                    .fixed_pattern
                    .as_ref()
                    .map_or_else(|| "flexible".to_string(), ToString::to_string);
                let _ = writeln!(
                    out,
                    "{:>2}. {:<width$}  {:>3} = 4 x {:<2}  {}",
                    i + 1,
                    t.name,
                    t.total_syllables,
                    t.syllables_per_quarter,
                    pattern,
                );
            }
            out
        }
        OutputFormat::Md => {
            let mut out =
                String::from("| # | Meter | Syllables | Per quarter | Pattern |\n|---:|---|---:|---:|---|\n");
            for (i, t) in templates.iter().enumerate() {
                let pattern = t
                    .fixed_pattern
                    .as_ref()
                    .map_or_else(|| "flexible".to_string(), |p| format!("`{p}`"));
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    i + 1,
                    t.name,
                    t.total_syllables,
                    t.syllables_per_quarter,
                    pattern
                );
            }
            out
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_result_lists_breakdown() {
        let r = chandas_core::identify("कका");
        let out = result_text(&r);
        assert!(out.contains("Breakdown:   क(L) का(G)"));
        assert!(out.contains("Detected:    no"));
    }

    #[test]
    fn md_steps_fence_results() {
        let r = chandas_core::identify("कका");
        let steps = chandas_core::explain("कका", &r);
        let out = steps_md(&steps);
        assert!(out.starts_with("### Step 1: Text Preprocessing"));
        assert!(out.contains("```text\nCleaned text: कका\n```"));
    }

    #[test]
    fn catalog_text_marks_flexible() {
        let out = catalog(chandas_core::Analyzer::new().catalog().templates(), OutputFormat::Text)
            .unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.starts_with(" 1. Anushtup"));
        assert!(first.ends_with("flexible"));
    }
}
