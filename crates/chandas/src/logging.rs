//! Logging initialisation via tracing-subscriber.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count.
pub(crate) fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber.
///
/// An explicit `-v` wins over `RUST_LOG`; without it `RUST_LOG` is honored
/// and the level falls back to `warn`.
pub(crate) fn init(verbose: u8) -> Result<()> {
    let level = level_for(verbose);
    let filter = if verbose > 0 {
        EnvFilter::try_new(level)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to set log subscriber: {e}"))
}
