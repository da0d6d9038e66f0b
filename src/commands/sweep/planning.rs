//! Sweep plan building logic.

use super::types::{CandidateRef, SweepEntry, SweepPlan};
use crate::error::Result;
use crate::git::RefSource;
use crate::ignore::IgnoreSet;
use chrono::{DateTime, Utc};

/// Build the sweep plan from the repository's references.
///
/// A reference is selected when it lives under `refs/remotes/<remote>/`, is
/// not the remote's `HEAD` pointer, is not ignored, and (with a cutoff) its
/// commit is strictly older than the cutoff. Commit times are only read for
/// references that pass the name checks. The plan keeps enumeration order.
///
/// # Errors
///
/// Fails as a whole if any candidate's commit cannot be resolved.
pub fn build_sweep_plan<S: RefSource + ?Sized>(
    source: &S,
    remote: &str,
    ignore: &IgnoreSet,
    cutoff: Option<DateTime<Utc>>,
) -> Result<SweepPlan> {
    let namespace = format!("refs/remotes/{}/", remote);
    let mut plan = SweepPlan {
        remote: remote.to_string(),
        cutoff,
        entries: Vec::new(),
    };

    for name in source.reference_names()? {
        let Some(branch) = name.strip_prefix(&namespace).map(str::to_string) else {
            continue;
        };

        // refs/remotes/<remote>/HEAD points at the default branch; it is not a branch.
        if branch == "HEAD" {
            continue;
        }

        if ignore.contains(&name) {
            tracing::debug!(refname = %name, "skipping ignored ref");
            continue;
        }

        let candidate = CandidateRef {
            committed_at: source.commit_time(&name)?,
            name,
        };

        if !is_stale(&candidate, cutoff) {
            tracing::debug!(
                refname = %candidate.name,
                committed_at = %candidate.committed_at,
                "skipping recent ref"
            );
            continue;
        }

        plan.entries.push(SweepEntry {
            tracking_ref: candidate.name,
            branch,
            committed_at: candidate.committed_at,
        });
    }

    tracing::info!(remote, selected = plan.len(), "built sweep plan");
    Ok(plan)
}

/// A candidate is stale when there is no cutoff or it was committed strictly before it.
pub fn is_stale(candidate: &CandidateRef, cutoff: Option<DateTime<Utc>>) -> bool {
    cutoff.is_none_or(|cutoff| candidate.committed_at < cutoff)
}
