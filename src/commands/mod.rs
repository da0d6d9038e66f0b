//! Command implementations for gitsweep.
//!
//! Resolves the command-line arguments into a [`SweepConfig`] and hands it
//! to the sweep command.

mod sweep;

use crate::cli::SweepArgs;
use crate::config::SweepConfig;
use crate::error::Result;

/// Dispatch parsed arguments to the sweep command.
pub fn dispatch(args: SweepArgs) -> Result<()> {
    let config = SweepConfig::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");
    sweep::cmd_sweep(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;

    #[test]
    fn dispatch_without_path_is_configuration_error() {
        let err = dispatch(SweepArgs::default()).unwrap_err();
        assert!(matches!(err, SweepError::Configuration(_)));
    }

    #[test]
    fn dispatch_with_file_path_is_repository_not_found() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-repo.txt");
        std::fs::write(&file, "plain file\n").unwrap();

        let args = SweepArgs {
            path: Some(file),
            ..SweepArgs::default()
        };

        let err = dispatch(args).unwrap_err();
        assert!(matches!(err, SweepError::RepositoryNotFound { .. }));
        assert_eq!(err.exit_code(), crate::exit_codes::REPOSITORY_NOT_FOUND);
    }

    #[test]
    fn dispatch_with_bad_age_fails_before_opening_repository() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = SweepArgs {
            path: Some(temp_dir.path().to_path_buf()),
            age: Some("3d1y".to_string()),
            ..SweepArgs::default()
        };

        let err = dispatch(args).unwrap_err();
        assert!(matches!(err, SweepError::MalformedAgeExpression { .. }));
    }
}
