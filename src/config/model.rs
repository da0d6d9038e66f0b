//! Settings file model and resolved runtime configuration.

use super::types::OutputFormat;
use crate::age::AgeSpec;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Per-repository settings.
///
/// This struct represents the contents of `<repo>/.gitsweep.yaml`.
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepoSettings {
    /// Remote to sweep instead of `origin`.
    pub remote: Option<String>,

    /// Age expression. An empty string disables the age filter.
    pub age: Option<String>,

    /// Extra `remote/branch` names that are never swept.
    pub ignore: Vec<String>,

    /// Username offered with plaintext or SSH agent credentials.
    pub username: Option<String>,
}

/// Fully resolved configuration for one sweep.
///
/// The password is kept as a [`SecretString`] so it never shows up in
/// `Debug` output or logs.
#[derive(Debug)]
pub struct SweepConfig {
    /// Repository root.
    pub path: PathBuf,

    /// Remote whose branches are swept.
    pub remote: String,

    /// Report only; never push deletions.
    pub preview: bool,

    /// Ignore entries from the command line and the settings file.
    /// The `.gitsweepignore` file and the built-in default are added at sweep time.
    pub ignore: Vec<String>,

    /// Age filter. `None` sweeps regardless of age.
    pub age: Option<AgeSpec>,

    /// Username override for credentials.
    pub username: Option<String>,

    /// Password for plaintext credentials. When absent, the SSH agent is used.
    pub password: Option<SecretString>,

    /// Report format.
    pub output: OutputFormat,
}

impl SweepConfig {
    /// Configuration with defaults for everything but the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            remote: super::types::DEFAULT_REMOTE.to_string(),
            preview: false,
            ignore: Vec::new(),
            age: Some(AgeSpec {
                years: 0,
                months: 1,
                days: 0,
            }),
            username: None,
            password: None,
            output: OutputFormat::Text,
        }
    }
}
