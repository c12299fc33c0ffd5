use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chandas_config::{self as cli, OutputFormat, TomlConfig};
use chandas_core::Analyzer;
use chandas_core::settings::AnalysisSettings;
use tracing::{debug, info};

/// Everything a command needs after flags and files are merged.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub format: OutputFormat,
    pub settings: AnalysisSettings,
}

impl ResolvedConfig {
    pub fn analyzer(&self) -> Result<Analyzer> {
        Analyzer::with_settings(self.settings.clone()).context("Invalid meter in config")
    }
}

fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("chandas").join("config.toml"))
}

/// Load `--config`, or the per-user file when it exists.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    if let Some(path) = explicit {
        let config = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        return Ok(Some(config));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            info!(path = %path.display(), "loaded config");
            Ok(Some(config))
        }
        _ => {
            debug!("no config file");
            Ok(None)
        }
    }
}

pub(crate) fn resolve(global: &cli::GlobalArgs) -> Result<ResolvedConfig> {
    let config = load_config(global.config.as_deref())?;
    Ok(ResolvedConfig {
        format: cli::resolve_format(global, config.as_ref()),
        settings: cli::resolve_settings(global, config.as_ref()),
    })
}
