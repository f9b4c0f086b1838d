//! loader - Locate a CSV dataset, load it and print a summary
//!
//! The pipeline is linear:
//! - Resolve the file (explicit path or search by name)
//! - Decode and parse it into a table, optionally promoting an index column
//! - Print shape, columns and the first rows
//! - Optionally write a binary snapshot of the table

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod backends;
mod cli;
mod core;

use crate::core::error::EXIT_OK;

fn init_logging(cli: &cli::Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let _ = fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(&cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli::run(&cli, &mut out) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            // nobody is left to read the diagnostic
            if !err.is_broken_pipe() {
                let _ = writeln!(out, "{}", err.report_line());
            }
            ExitCode::from(err.exit_code())
        }
    }
}
