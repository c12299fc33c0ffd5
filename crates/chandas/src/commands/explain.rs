use anyhow::Result;
use chandas_config::VerseArgs;

use crate::config::ResolvedConfig;
use crate::{input, render};

pub(crate) fn handle(args: VerseArgs, resolved: &ResolvedConfig) -> Result<()> {
    let verse = input::read_verse(&args)?;
    let analyzer = resolved.analyzer()?;
    let result = analyzer.identify(&verse);
    let steps = analyzer.explain(&verse, &result);

    let out = render::explained(&result, &steps, resolved.format)?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}
