//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber` so stdout carries only the
//! sweep report. `GITSWEEP_LOG` takes an `EnvFilter` directive and overrides
//! the `-v` count.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "GITSWEEP_LOG";

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "gitsweep=warn",
        1 => "gitsweep=info",
        2 => "gitsweep=debug",
        _ => "gitsweep=trace",
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
