use std::io::{IsTerminal, Read};

use anyhow::{Context, Result, bail};
use chandas_config::VerseArgs;

/// The verse text from the argument, `--file`, or piped stdin.
pub(crate) fn read_verse(args: &VerseArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read verse file {}", path.display()));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No verse given: pass TEXT, --file <PATH>, or pipe the verse on stdin");
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("Failed to read verse from stdin")?;
    Ok(buf)
}
