use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::render;

pub(crate) fn handle(resolved: &ResolvedConfig) -> Result<()> {
    let analyzer = resolved.analyzer()?;
    let out = render::catalog(analyzer.catalog().templates(), resolved.format)?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}
