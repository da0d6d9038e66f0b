//! Sweep execution logic.

use super::types::SweepPlan;
use crate::error::Result;
use crate::git::{AuthOptions, VcsEngine};

/// Push the plan's deletions to its remote and return how many were removed.
///
/// All deletions go out in a single push. Nothing is pushed for an empty plan.
pub fn execute_sweep<E: VcsEngine + ?Sized>(
    engine: &mut E,
    plan: &SweepPlan,
    auth: AuthOptions<'_>,
) -> Result<usize> {
    if plan.is_empty() {
        return Ok(0);
    }

    let refspecs = plan.refspecs();
    engine.push_deletions(&plan.remote, &refspecs, auth)?;

    tracing::info!(remote = %plan.remote, removed = refspecs.len(), "deleted remote branches");
    Ok(refspecs.len())
}
