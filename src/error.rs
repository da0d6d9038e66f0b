//! Error types for the gitsweep CLI.
//!
//! Uses thiserror for derive macros. Every failure in the pipeline is one of
//! these kinds, so callers and tests can match on the cause instead of the text.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Network operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Push,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Fetch => f.write_str("fetch"),
            Operation::Push => f.write_str("push"),
        }
    }
}

/// Main error type for gitsweep operations.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Missing or invalid configuration (path, settings file, ignore file).
    #[error("{0}")]
    Configuration(String),

    /// The age expression does not follow `<years>y<months>m<days>d`.
    #[error("malformed age expression '{expr}': {reason}")]
    MalformedAgeExpression { expr: String, reason: String },

    /// The path could not be opened as a git repository.
    #[error("no git repository at '{}': {message}", path.display())]
    RepositoryNotFound { path: PathBuf, message: String },

    /// Each credential kind was offered once and the remote rejected them.
    #[error("authentication failed during {operation}: {message}")]
    AuthenticationExhausted { operation: Operation, message: String },

    /// The commit behind a candidate reference could not be read.
    #[error("failed to resolve commit for '{refname}': {message}")]
    RefResolution { refname: String, message: String },

    /// Transport-level failure reported by libgit2.
    #[error("{operation} failed: {message}")]
    Network { operation: Operation, message: String },

    /// The remote refused to delete a branch.
    #[error("remote rejected deletion of '{refname}': {reason}")]
    PushRejected { refname: String, reason: String },

    /// The report could not be rendered.
    #[error("failed to write report: {0}")]
    Output(String),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::Configuration(_)
            | SweepError::MalformedAgeExpression { .. }
            | SweepError::Output(_) => exit_codes::USER_ERROR,
            SweepError::RepositoryNotFound { .. } => exit_codes::REPOSITORY_NOT_FOUND,
            SweepError::AuthenticationExhausted { .. } => exit_codes::AUTH_FAILURE,
            SweepError::RefResolution { .. }
            | SweepError::Network { .. }
            | SweepError::PushRejected { .. } => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for gitsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
