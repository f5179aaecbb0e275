//! # Changemaker Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Run the computation (see `changemaker_cli::run`)
//! 4. Map the outcome to an exit code

use std::io;
use std::process::ExitCode;

use clap::Parser;
use changemaker_cli::{init_tracing, run, write_output, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let json = args.json;
    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %err, code = ?err.code(), "Changemaker failed");
            if json {
                let written = serde_json::to_string(&err.body())
                    .map_err(Into::into)
                    .and_then(|body| write_output(&mut io::stdout().lock(), &body));
                if written.is_err() {
                    eprintln!("error: {}", err);
                }
            } else {
                eprintln!("error: {}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}
