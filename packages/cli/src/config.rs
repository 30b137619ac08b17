//! Run Configuration
//!
//! Resolved settings for one evaluation run, built from the parsed command
//! line.

use crate::Cli;
use clap::ValueEnum;
use std::path::PathBuf;

/// How the evaluation is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console messages
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Where the system description is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Standard input
    #[default]
    Stdin,
    /// A file on disk
    File(PathBuf),
}

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// System description source
    pub input: InputSource,

    /// Print the full parsed state before the evaluation
    pub show_state: bool,

    /// Output rendering
    pub format: OutputFormat,
}

impl RunConfig {
    /// Create a configuration with defaults (stdin, text, no state dump)
    pub fn new() -> Self {
        Self {
            input: InputSource::Stdin,
            show_state: false,
            format: OutputFormat::Text,
        }
    }

    /// Build from command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let input = match &cli.input {
            None => InputSource::Stdin,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path.clone()),
        };

        Self {
            input,
            show_state: cli.show_state,
            format: cli.format,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}
