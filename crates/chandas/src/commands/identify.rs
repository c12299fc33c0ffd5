use anyhow::Result;
use chandas_config::InputArgs;

use crate::config::ResolvedConfig;
use crate::{input, render};

pub(crate) fn handle(args: InputArgs, resolved: &ResolvedConfig) -> Result<()> {
    let verse = input::read_verse(&args.verse)?;
    let analyzer = resolved.analyzer()?;
    let result = analyzer.identify(&verse);

    let out = if args.explain {
        let steps = analyzer.explain(&verse, &result);
        render::explained(&result, &steps, resolved.format)?
    } else {
        render::result(&result, resolved.format)?
    };
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}
