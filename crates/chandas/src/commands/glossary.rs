use anyhow::{Result, bail};
use chandas_config::GlossaryArgs;

pub(crate) fn handle(args: GlossaryArgs) -> Result<()> {
    match args.term {
        None => print!("{}", chandas_explain::terms()),
        Some(term) => match chandas_explain::lookup(&term) {
            Some(entry) => println!("{entry}"),
            None => bail!("Unknown prosody term '{term}'"),
        },
    }
    Ok(())
}
