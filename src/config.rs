//! Configuration management for the JSON presenter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional user config file (TOML)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::Theme;

/// Default cap on input size; larger documents are left untouched rather
/// than rendered synchronously.
pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Command-line arguments for the JSON presenter
#[derive(Debug, Parser)]
#[command(name = "jsonp")]
#[command(about = "Render raw JSON documents as highlighted HTML pages")]
#[command(version)]
pub struct Args {
    /// Input file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Initial theme for the rendered page
    #[arg(long, help = "Initial theme ('dark' or 'light')")]
    pub theme: Option<String>,

    /// Maximum input size in bytes
    #[arg(long, help = "Skip documents larger than this many bytes")]
    pub max_bytes: Option<usize>,

    /// Log level for diagnostics
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// User config file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ConfigFile {
    pub theme: Option<String>,
    pub max_bytes: Option<usize>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial theme for rendered pages
    pub theme: Theme,
    /// Documents larger than this are skipped
    pub max_bytes: usize,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::Dark,
            max_bytes: DEFAULT_MAX_BYTES,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments and the user
    /// config file, CLI taking precedence.
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match user_config_path() {
            Some(path) if path.exists() => load_config_file(&path)?,
            _ => ConfigFile::default(),
        };
        Self::merge(args, file)
    }

    /// Merge CLI arguments over a loaded config file
    pub fn merge(args: Args, file: ConfigFile) -> Result<Self> {
        let theme_name = args.theme.or(file.theme);
        let theme = match theme_name.as_deref() {
            None | Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            Some(other) => anyhow::bail!("unknown theme '{other}' (expected 'dark' or 'light')"),
        };

        Ok(Config {
            theme,
            max_bytes: args
                .max_bytes
                .or(file.max_bytes)
                .unwrap_or(DEFAULT_MAX_BYTES),
            log_level: args.log_level,
        })
    }
}

/// Load and parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
}

/// Default user config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jsonp").join("config.toml"))
}
