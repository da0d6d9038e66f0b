//! Gitsweep: find and delete stale remote branches.
//!
//! This is the main entry point for the `gitsweep` CLI. It parses arguments,
//! sets up logging, runs the sweep, and maps errors to exit codes.

mod age;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod git;
mod ignore;
mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.sweep) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
