//! Data types for the sweep command.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A remote-tracking reference and the time of the commit it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRef {
    /// Fully-qualified name, `refs/remotes/<remote>/<branch>`.
    pub name: String,
    /// Committer time of the referenced commit.
    pub committed_at: DateTime<Utc>,
}

/// One branch selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepEntry {
    /// Local tracking reference that selected the branch.
    pub tracking_ref: String,
    /// Branch name on the remote.
    pub branch: String,
    /// Committer time of the branch tip.
    pub committed_at: DateTime<Utc>,
}

impl SweepEntry {
    /// Push refspec deleting the branch on the remote.
    pub fn deletion_refspec(&self) -> String {
        format!(":refs/heads/{}", self.branch)
    }
}

/// Branches selected for deletion, in reference enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepPlan {
    /// Remote the branches are deleted from.
    pub remote: String,
    /// Cutoff used for selection; `None` when age filtering is off.
    pub cutoff: Option<DateTime<Utc>>,
    /// Selected branches.
    pub entries: Vec<SweepEntry>,
}

impl SweepPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deletion refspecs in plan order.
    pub fn refspecs(&self) -> Vec<String> {
        self.entries.iter().map(SweepEntry::deletion_refspec).collect()
    }
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    #[serde(flatten)]
    pub plan: SweepPlan,
    /// Whether the run was a preview.
    pub preview: bool,
    /// Number of branches deleted on the remote.
    pub removed: usize,
}
