//! Configuration constants and small value types.

/// Settings file read from the repository root, if present.
pub const SETTINGS_FILE_NAME: &str = ".gitsweep.yaml";

/// Remote swept when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Age expression used when none is configured (one month).
pub const DEFAULT_AGE: &str = "1m";

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per swept branch plus summary lines.
    #[default]
    Text,
    /// A single JSON document once the run completes.
    Json,
}
