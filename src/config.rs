/*!
 * Configuration handling for Code2Summarize
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

use crate::error::{Result, SummarizeError};
use crate::filter::FilterConfig;
use crate::report::ReportFormat;
use crate::utils::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// Policy for files whose bytes cannot be read or decoded as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReadErrorPolicy {
    /// Abort the run on the first unreadable file (default)
    #[default]
    Abort,
    /// Keep the file's block with a notice and log a warning
    Skip,
}

/// Command-line arguments for Code2Summarize
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "code2summarize",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten a project directory into a single shareable text summary",
    long_about = "Walks a directory tree and writes one text document: an ASCII tree of the filtered structure followed by the full content of every matching file."
)]
pub struct Args {
    /// Target directory to summarize
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Comma-separated directory names to exclude (replaces the built-in list)
    #[clap(long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Comma-separated file extensions to include (replaces the built-in list)
    #[clap(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Named preset from ~/.config/code2summarize/presets.toml
    #[clap(long)]
    pub preset: Option<String>,

    /// Policy for unreadable or non-UTF-8 files
    #[clap(long, value_enum, default_value_t = ReadErrorPolicy::default())]
    pub read_error_policy: ReadErrorPolicy,

    /// Report format printed after the run
    #[clap(long, value_enum, default_value_t = ReportFormat::default())]
    pub report: ReportFormat,

    /// Copy the finished document to the system clipboard
    #[clap(long)]
    pub clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct Preset {
    pub(crate) exclude_dirs: Option<Vec<String>>,
    pub(crate) extensions: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, Preset>,
}

fn load_preset(name: &str) -> Result<Preset> {
    let home = dirs::home_dir()
        .ok_or_else(|| SummarizeError::Config("could not determine home directory".into()))?;
    let path = home
        .join(".config")
        .join("code2summarize")
        .join("presets.toml");
    load_preset_from(&path, name)
}

pub(crate) fn load_preset_from(path: &Path, name: &str) -> Result<Preset> {
    let content = fs::read_to_string(path).map_err(|e| {
        SummarizeError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    let parsed: PresetsFile = toml::from_str(&content).map_err(|e| {
        SummarizeError::Config(format!("failed to parse {}: {e}", path.display()))
    })?;

    parsed
        .presets
        .get(name)
        .cloned()
        .ok_or_else(|| SummarizeError::Config(format!("unknown preset: {name}")))
}

// CLI flags win over the preset, the preset wins over the defaults.
fn resolve_list(cli: Vec<String>, preset: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    if !cli.is_empty() {
        cli
    } else if let Some(values) = preset {
        values
    } else {
        defaults.iter().map(|s| s.to_string()).collect()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to summarize
    pub target_dir: PathBuf,

    /// Filter policy applied to both output sections
    pub filter: FilterConfig,

    /// Policy for unreadable or non-UTF-8 files
    pub read_error_policy: ReadErrorPolicy,

    /// Report format printed after the run
    pub report: ReportFormat,

    /// Copy the finished document to the system clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let preset = match &args.preset {
            Some(name) => load_preset(name)?,
            None => Preset::default(),
        };
        Ok(Self::resolve(args, preset))
    }

    // List resolution separated from the preset-file I/O so the
    // precedence rules can be exercised directly.
    pub(crate) fn resolve(args: Args, preset: Preset) -> Self {
        let excluded_dirs =
            resolve_list(args.exclude_dirs, preset.exclude_dirs, &DEFAULT_EXCLUDED_DIRS);
        let extensions = resolve_list(args.extensions, preset.extensions, &DEFAULT_EXTENSIONS);

        Self {
            target_dir: PathBuf::from(args.directory_path),
            filter: FilterConfig::new(excluded_dirs, extensions),
            read_error_policy: args.read_error_policy,
            report: args.report,
            clip: args.clip,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );
        Ok(())
    }
}
