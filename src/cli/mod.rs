//! CLI argument parsing for gitsweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Defaults that can also come from `.gitsweep.yaml` are left as `None`
//! here and resolved in the `config` module.

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

/// Gitsweep: find and delete stale remote branches.
///
/// Fetches the remote with pruning, lists remote-tracking branches whose last
/// commit is older than the age cutoff and not ignored, and deletes them on
/// the remote unless `--preview` is given.
#[derive(Parser, Debug)]
#[command(name = "gitsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for a sweep.
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// Repository root to sweep.
    pub path: Option<PathBuf>,

    /// Remote whose branches are swept [default: origin].
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Only report what would be deleted.
    #[arg(short, long)]
    pub preview: bool,

    /// Branches never swept, as remote/branch (repeatable or comma-separated).
    /// origin/master is always ignored.
    #[arg(short, long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Sweep branches whose last commit is older than this, e.g. 1y2m3d [default: 1m].
    #[arg(short, long, conflicts_with = "no_age")]
    pub age: Option<String>,

    /// Sweep regardless of last commit date.
    #[arg(long)]
    pub no_age: bool,

    /// Password for plaintext authentication. Without it the SSH agent is used.
    #[arg(long, env = "GITSWEEP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Username for authentication [default: from the remote URL, else git].
    #[arg(short, long)]
    pub username: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_path_only() {
        let cli = Cli::try_parse_from(["gitsweep", "/repo"]).unwrap();
        assert_eq!(cli.sweep.path, Some(PathBuf::from("/repo")));
        assert_eq!(cli.sweep.remote, None);
        assert!(!cli.sweep.preview);
        assert!(cli.sweep.ignore.is_empty());
        assert_eq!(cli.sweep.age, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_without_path() {
        let cli = Cli::try_parse_from(["gitsweep"]).unwrap();
        assert_eq!(cli.sweep.path, None);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::try_parse_from([
            "gitsweep",
            "/repo",
            "--remote",
            "upstream",
            "--preview",
            "--ignore",
            "upstream/main",
            "--age",
            "1y2m3d",
            "--username",
            "deploy",
            "--password",
            "secret",
            "--json",
            "-vv",
        ])
        .unwrap();

        let args = cli.sweep;
        assert_eq!(args.remote.as_deref(), Some("upstream"));
        assert!(args.preview);
        assert_eq!(args.ignore, vec!["upstream/main"]);
        assert_eq!(args.age.as_deref(), Some("1y2m3d"));
        assert_eq!(args.username.as_deref(), Some("deploy"));
        assert_eq!(args.password.as_deref(), Some("secret"));
        assert!(args.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_ignore_repeated_and_comma_separated() {
        let cli = Cli::try_parse_from([
            "gitsweep",
            "/repo",
            "-i",
            "origin/a,origin/b",
            "-i",
            "origin/c",
        ])
        .unwrap();
        assert_eq!(cli.sweep.ignore, vec!["origin/a", "origin/b", "origin/c"]);
    }

    #[test]
    fn age_conflicts_with_no_age() {
        let result = Cli::try_parse_from(["gitsweep", "/repo", "--age", "1m", "--no-age"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_no_age() {
        let cli = Cli::try_parse_from(["gitsweep", "/repo", "--no-age"]).unwrap();
        assert!(cli.sweep.no_age);
    }
}
