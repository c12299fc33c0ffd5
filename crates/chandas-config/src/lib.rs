//! # chandas-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the configuration file
//! structure. The clap-free analysis settings live in `chandas-settings`;
//! this crate maps both the command line and `config.toml` onto them.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use chandas_settings::{AnalysisSettings, MeterSpec};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// `chandas` identifies the meter of a Sanskrit verse.
///
/// Default mode (no subcommand) identifies the verse given as an argument,
/// read from `--file`, or piped on stdin.
#[derive(Parser, Debug)]
#[command(name = "chandas", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Input for the implicit `identify` mode (when no subcommand is provided).
    #[command(flatten)]
    pub input: InputArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output format [default: text].
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file (defaults to `<config dir>/chandas/config.toml`).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Do not force the last syllable of each line to guru.
    #[arg(long, global = true)]
    pub no_line_end_heavy: bool,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Identify the meter of a verse (default).
    Identify(InputArgs),

    /// Walk through the five identification steps.
    Explain(VerseArgs),

    /// List the known meters in match priority order.
    Catalog,

    /// Look up a prosody term, or list all terms.
    Glossary(GlossaryArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Where the verse comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct VerseArgs {
    /// Verse text. Reads stdin when neither TEXT nor --file is given.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the verse from a file.
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[command(flatten)]
    pub verse: VerseArgs,

    /// Append the five-step explanation to the result.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlossaryArgs {
    /// Term to look up (e.g. `guru`, `laghu`, `pada`). Lists all terms when omitted.
    #[arg(value_name = "TERM")]
    pub term: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Markdown.
    Md,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Analysis settings.
    pub analysis: AnalysisConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// Custom meters appended after the built-in catalog.
    pub meters: Vec<MeterSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Force the last syllable of each line to guru (default: true).
    pub line_end_forces_heavy: Option<bool>,

    /// Characters of cleaned text shown by `explain` (default: 50).
    pub preview_chars: Option<usize>,

    /// Leading syllables listed by `explain` (default: 5).
    pub sample_syllables: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "text", "json", or "md".
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Analysis settings with file values laid over the defaults.
    pub fn settings(&self) -> AnalysisSettings {
        let defaults = AnalysisSettings::default();
        AnalysisSettings {
            line_end_forces_heavy: self
                .analysis
                .line_end_forces_heavy
                .unwrap_or(defaults.line_end_forces_heavy),
            preview_chars: self
                .analysis
                .preview_chars
                .unwrap_or(defaults.preview_chars),
            sample_syllables: self
                .analysis
                .sample_syllables
                .unwrap_or(defaults.sample_syllables),
            meters: self.meters.clone(),
        }
    }
}

/// Lay command-line overrides over file-derived settings.
pub fn resolve_settings(global: &GlobalArgs, config: Option<&TomlConfig>) -> AnalysisSettings {
    let mut settings = config.map(TomlConfig::settings).unwrap_or_default();
    if global.no_line_end_heavy {
        settings.line_end_forces_heavy = false;
    }
    settings
}

/// Output format: command line first, then config file, then text.
pub fn resolve_format(global: &GlobalArgs, config: Option<&TomlConfig>) -> OutputFormat {
    global
        .format
        .or_else(|| config.and_then(|c| c.output.format))
        .unwrap_or_default()
}
