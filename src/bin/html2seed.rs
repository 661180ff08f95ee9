//! Command-line host for html2seed.
//!
//! Reads markup from a file (or stdin), converts it, and writes the Seed code to a file (or
//! stdout). Logging goes to stderr; set `RUST_LOG=debug` for per-conversion details.
//!
//! Usage:
//!   html2seed [INPUT] [-o OUTPUT] [--tabs] [--indent-size N] [--keep-ids]

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use html2seed::{
    ConfigError, Converter, ConverterConfig, IdValue, IndentConfig, MalformedStreamError,
};

#[derive(Parser)]
#[command(name = "html2seed", version)]
#[command(about = "Convert HTML into Seed element macros")]
struct Cli {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent with one tab per level instead of spaces
    #[arg(long)]
    tabs: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent_size: usize,

    /// Put the element's actual id in `id!(...)` instead of an empty string
    #[arg(long)]
    keep_ids: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("No markup supplied. Provide some HTML and try again.")]
    EmptyInput,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid indentation: {0}")]
    Config(#[from] ConfigError),
    #[error("conversion failed: {0}")]
    Malformed(#[from] MalformedStreamError),
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::EmptyInput) => {
            warn!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let markup = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut markup = String::new();
            io::stdin().read_to_string(&mut markup)?;
            markup
        }
    };
    if markup.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    let indent = IndentConfig::from_editor(!cli.tabs, cli.indent_size)?;
    let id_value = if cli.keep_ids {
        IdValue::Attribute
    } else {
        IdValue::Placeholder
    };
    let config = ConverterConfig::new()
        .with_indent(indent)
        .with_id_value(id_value);

    let code = Converter::new(config).convert(&markup)?;

    match &cli.output {
        Some(path) => fs::write(path, code)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{code}")?;
        }
    }
    Ok(())
}
