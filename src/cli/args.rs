//! Command line argument parsing for the misprint CLI using clap.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::corrector::{Backend, CorrectorConfig};

/// Default word list, looked up in the working directory.
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";

/// misprint - correct misspelled words against a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "misprint")]
#[command(about = "Correct misspelled words by deletion-based misprint matching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MisprintArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum misprint distance (overrides the configuration file)
    #[arg(short, long)]
    pub max_misprints: Option<usize>,

    /// Dictionary backend (overrides the configuration file)
    #[arg(short, long)]
    pub backend: Option<BackendArg>,

    /// Keep spare capacity after loading the dictionary
    #[arg(long)]
    pub no_compact: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MisprintArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the corrector configuration: defaults, then the configuration
    /// file, then command-line overrides.
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let mut config = match &self.config {
            Some(path) => CorrectorConfig::from_json(&fs::read_to_string(path)?)?,
            None => CorrectorConfig::default(),
        };

        if let Some(max_misprints) = self.max_misprints {
            config.max_misprints = max_misprints;
        }
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        if self.no_compact {
            config.compact = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct lines of text read from stdin or given with --text
    Correct(CorrectArgs),

    /// Correct individual words
    Lookup(LookupArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for correcting text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Word list; if it cannot be opened, words are read from stdin
    #[arg(short, long, value_name = "DICTIONARY_FILE", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Line of text to correct (repeatable); stdin is read when absent
    #[arg(short, long = "text", value_name = "LINE")]
    pub text: Vec<String>,
}

/// Arguments for looking up words
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word list
    #[arg(short, long, value_name = "DICTIONARY_FILE", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list
    #[arg(short, long, value_name = "DICTIONARY_FILE", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Dictionary backends selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    /// Arena trie
    Trie,
    /// Hash maps with re-verification
    Flat,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Trie => Backend::Trie,
            BackendArg::Flat => Backend::Flat,
        }
    }
}
