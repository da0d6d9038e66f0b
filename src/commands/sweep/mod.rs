//! Implementation of the sweep command.
//!
//! Finds remote branches whose last commit is older than the age cutoff and
//! deletes them on the remote:
//! - Fetches the remote with pruning so the tracking refs are current
//! - Selects `refs/remotes/<remote>/*` refs that are stale and not ignored
//! - Prints one line per selected branch and a summary
//! - Pushes `:refs/heads/<branch>` for each selection unless previewing
//!
//! # Safety
//!
//! - Nothing is deleted unless the fetch succeeded
//! - `--preview` never pushes
//! - `origin/master` and the remote's `HEAD` pointer are never swept

mod display;
mod execution;
mod planning;
mod types;


use crate::config::{OutputFormat, SweepConfig};
use crate::error::Result;
use crate::git::{AuthOptions, GitRepository, VcsEngine};
use crate::ignore::{self, DEFAULT_IGNORE};
use chrono::{DateTime, Utc};

use display::{print_json_report, print_sweep_plan, removed_line};
use execution::execute_sweep;
use planning::build_sweep_plan;
use types::SweepReport;

/// Execute a sweep against the repository named in `config`.
pub fn cmd_sweep(config: SweepConfig) -> Result<()> {
    let mut repo = GitRepository::open(&config.path)?;
    let report = run_sweep(&mut repo, &config, Utc::now())?;

    if config.output == OutputFormat::Json {
        print_json_report(&report)?;
    }

    Ok(())
}

/// Run the sweep pipeline against an already opened engine.
///
/// Text output is printed as the run progresses so the selected branches are
/// visible before anything is deleted.
pub fn run_sweep<E: VcsEngine>(
    engine: &mut E,
    config: &SweepConfig,
    now: DateTime<Utc>,
) -> Result<SweepReport> {
    let cutoff = config
        .age
        .map(|age| age.cutoff_from(now))
        .transpose()?;

    let file_ignores = ignore::read_ignore_file(&config.path)?;
    let ignore_set = ignore::resolve(&file_ignores, &config.ignore, DEFAULT_IGNORE);
    tracing::debug!(ignored = ?ignore_set.iter().collect::<Vec<_>>(), "resolved ignore set");

    let auth = AuthOptions {
        username: config.username.as_deref(),
        password: config.password.as_ref(),
    };

    // Each network operation gets its own credential provider.
    engine.fetch_prune(&config.remote, auth)?;

    let plan = build_sweep_plan(&*engine, &config.remote, &ignore_set, cutoff)?;

    let print_text = config.output == OutputFormat::Text;
    if print_text {
        print_sweep_plan(&plan, now);
    }

    let mut report = SweepReport {
        plan,
        preview: config.preview,
        removed: 0,
    };

    if config.preview {
        tracing::info!("preview mode: no branches deleted");
        return Ok(report);
    }

    if !report.plan.is_empty() {
        report.removed = execute_sweep(engine, &report.plan, auth)?;
        if print_text {
            println!("{}", removed_line(report.removed));
        }
    }

    Ok(report)
}
