//! # Changemaker CLI Library
//!
//! Thin frontend over change-core. Everything testable lives here;
//! `main.rs` only parses arguments and maps the outcome to an exit code.
//!
//! ## Module Organization
//! ```text
//! changemaker_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── config.rs       ◄─── Env + default configuration
//! ├── commands.rs     ◄─── make_change: text in, response out
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── CLI error type and exit codes
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};
use error::CliResult;

/// Minimum coins (and optionally every combination) for an amount.
#[derive(Debug, Clone, Parser)]
#[command(name = "changemaker", version, about)]
pub struct Args {
    /// Target amount, a non-negative whole number
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Comma-separated coin values, e.g. "25, 10, 5, 1"
    #[arg(short, long)]
    pub coins: Option<String>,

    /// Also list every distinct combination of coins
    #[arg(short, long)]
    pub all: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs one computation and prints it. Returns the process exit code.
///
/// ## Sequence
/// 1. Load config (env over defaults), apply flags on top
/// 2. Compute change via change-core
/// 3. Render to stdout
pub fn run(args: Args) -> CliResult<u8> {
    let mut config = Config::from_env()?;
    if args.json {
        config.output = OutputFormat::Json;
    }

    let coins = args.coins.clone().unwrap_or_else(|| config.coins.clone());
    info!(amount = %args.amount, coins = %coins, all = args.all, "Computing change");

    let response = commands::make_change(&args.amount, &coins, args.all, &config)?;

    let rendered = match config.output {
        OutputFormat::Text => render::render_text(&response),
        OutputFormat::Json => render::render_json(&response)?,
    };
    write_output(&mut io::stdout().lock(), &rendered)?;

    Ok(response.exit_code())
}

/// Writes one rendered document and a trailing newline.
///
/// A closed reader (`changemaker ... | head`) is not a failure.
pub fn write_output<W: Write>(out: &mut W, rendered: &str) -> CliResult<()> {
    match writeln!(out, "{}", rendered).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for changemaker crates when `RUST_LOG` is unset
/// - Default: WARN, INFO for changemaker crates
///
/// Logs go to stderr so stdout carries only the result.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,changemaker_cli=debug,changemaker=debug,change_core=debug"
    } else {
        "warn,changemaker_cli=info,changemaker=info,change_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
