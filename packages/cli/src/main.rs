use anyhow::{Context, Result};
use bankers_core::{evaluate, parse_input};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{InputSource, OutputFormat, RunConfig};

/// Banker's algorithm safety evaluator
///
/// Reads a system description (resource counts, Available, Max, Allocation
/// and an optional request line) and reports whether the request keeps the
/// system in a safe state.
#[derive(Parser)]
#[command(name = "bankers")]
#[command(version, about = "Banker's algorithm safety evaluator", long_about = None)]
pub struct Cli {
    /// Input file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Print the full parsed state before the evaluation
    #[arg(long)]
    pub show_state: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    info!("bankers v{}", env!("CARGO_PKG_VERSION"));

    let config = RunConfig::from_cli(&cli);
    let text = read_input(&config.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &text, &mut out)?;
    out.flush()?;

    Ok(())
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Parse, evaluate and render one system description
fn run(config: &RunConfig, text: &str, out: &mut impl Write) -> Result<()> {
    let input = parse_input(text)?;
    let evaluation = evaluate(&input)?;

    debug!(safe = evaluation.is_safe(), "evaluation complete");

    if config.show_state {
        write!(out, "{}", evaluation.state_before.report())?;
    }

    match config.format {
        OutputFormat::Text => write!(out, "{}", evaluation)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &evaluation)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
