//! Settings loading, validation, and resolution of the runtime configuration.

use super::model::{RepoSettings, SweepConfig};
use super::types::{DEFAULT_AGE, OutputFormat, SETTINGS_FILE_NAME};
use crate::age::AgeSpec;
use crate::cli::SweepArgs;
use crate::error::{Result, SweepError};
use secrecy::SecretString;
use std::io::{self, ErrorKind};
use std::path::Path;

impl RepoSettings {
    /// Load `<repo_path>/.gitsweep.yaml`, or defaults if the file does not exist.
    ///
    /// A `repo_path` that is not a directory also yields defaults; opening the
    /// repository reports that path afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::Configuration` if the file exists but cannot be
    /// read, parsed, or validated.
    pub fn load(repo_path: &Path) -> Result<Self> {
        let path = repo_path.join(SETTINGS_FILE_NAME);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if is_absent(&e) => return Ok(Self::default()),
            Err(e) => {
                return Err(SweepError::Configuration(format!(
                    "failed to read settings file '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        tracing::debug!(path = %path.display(), "loading settings file");
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: RepoSettings = serde_yaml::from_str(yaml).map_err(|e| {
            SweepError::Configuration(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - `remote` must be a valid remote name
    /// - `age` must be empty or a well-formed age expression
    pub fn validate(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            validate_remote_name(remote)?;
        }

        if let Some(age) = self.age.as_deref().filter(|a| !a.trim().is_empty()) {
            AgeSpec::parse(age)?;
        }

        Ok(())
    }
}

impl SweepConfig {
    /// Resolve command-line arguments against the repository's settings file.
    ///
    /// Precedence is flag, then settings file, then built-in default.
    ///
    /// # Errors
    ///
    /// - `SweepError::Configuration` if no path was given, the remote name is
    ///   invalid, or the settings file is broken
    /// - `SweepError::MalformedAgeExpression` if the age expression is invalid
    pub fn from_args(args: SweepArgs) -> Result<Self> {
        let path = args.path.ok_or_else(|| {
            SweepError::Configuration(
                "path is required: pass the repository root to sweep".to_string(),
            )
        })?;

        let settings = RepoSettings::load(&path)?;
        let mut config = SweepConfig::new(path);

        if let Some(remote) = args.remote.or(settings.remote) {
            validate_remote_name(&remote)?;
            config.remote = remote;
        }

        config.age = resolve_age(args.age.as_deref(), args.no_age, settings.age.as_deref())?;
        config.preview = args.preview;
        config.ignore = args.ignore.into_iter().chain(settings.ignore).collect();
        config.username = args.username.or(settings.username);
        config.password = args.password.map(SecretString::from);
        config.output = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(config)
    }
}

/// Pick the age expression and parse it.
///
/// An empty expression, or `--no-age`, disables age filtering. An all-zero
/// expression such as `0d` is a real cutoff of "now".
pub(crate) fn resolve_age(
    cli_age: Option<&str>,
    no_age: bool,
    settings_age: Option<&str>,
) -> Result<Option<AgeSpec>> {
    if no_age {
        return Ok(None);
    }

    let expr = cli_age.or(settings_age).unwrap_or(DEFAULT_AGE);
    if expr.trim().is_empty() {
        return Ok(None);
    }

    AgeSpec::parse(expr).map(Some)
}

/// The file, or the directory it should live in, does not exist.
fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

fn validate_remote_name(remote: &str) -> Result<()> {
    if remote.is_empty() {
        return Err(SweepError::Configuration(
            "config validation failed: remote must not be empty".to_string(),
        ));
    }
    if remote.contains('/') || remote.chars().any(char::is_whitespace) {
        return Err(SweepError::Configuration(format!(
            "config validation failed: '{}' is not a valid remote name",
            remote
        )));
    }
    Ok(())
}
