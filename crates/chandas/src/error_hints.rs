use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no verse given") {
        push_hint(&mut out, "Example: `chandas \"कका । कका ॥\"`.");
        push_hint(&mut out, "Or pipe a file: `chandas < verse.txt`.");
    }

    if haystack.contains("no such file or directory")
        || haystack.contains("cannot find the file")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("failed to load config") {
        push_hint(
            &mut out,
            "Check config.toml syntax: sections are [analysis], [output] and [[meters]].",
        );
    }

    if haystack.contains("unknown prosody term") {
        push_hint(&mut out, "Run `chandas glossary` to list the known terms.");
    }

    if haystack.contains("invalid weight symbol") {
        push_hint(
            &mut out,
            "Meter patterns may only contain `L` (laghu) and `G` (guru).",
        );
    }

    if haystack.contains("invalid meter in config") {
        push_hint(
            &mut out,
            "Run `chandas catalog` to see built-in names; custom meters must use new names.",
        );
        push_hint(
            &mut out,
            "A pattern covers one quarter: its length must equal syllables_per_quarter.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
