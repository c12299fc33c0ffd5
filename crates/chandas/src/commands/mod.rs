pub(crate) mod catalog;
pub(crate) mod completions;
pub(crate) mod explain;
pub(crate) mod glossary;
pub(crate) mod identify;

use anyhow::Result;
use chandas_config as cli;

use crate::config::ResolvedConfig;

pub(crate) fn dispatch(cli: cli::Cli, resolved: &ResolvedConfig) -> Result<()> {
    match cli.command.unwrap_or(cli::Commands::Identify(cli.input)) {
        cli::Commands::Identify(args) => identify::handle(args, resolved),
        cli::Commands::Explain(args) => explain::handle(args, resolved),
        cli::Commands::Catalog => catalog::handle(resolved),
        cli::Commands::Glossary(args) => glossary::handle(args),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}
