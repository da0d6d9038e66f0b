//! Display and formatting utilities for sweep command output.

use super::types::{SweepPlan, SweepReport};
use crate::error::{Result, SweepError};
use chrono::{DateTime, Utc};

/// Summary printed when nothing qualifies.
pub const NOTHING_TO_SWEEP: &str = "No matching remote branch to sweep";

/// Print one line per swept branch followed by the summary line.
pub fn print_sweep_plan(plan: &SweepPlan, now: DateTime<Utc>) {
    for line in plan_lines(plan, now) {
        println!("{}", line);
    }
    println!("{}", summary_line(plan));
}

/// `- <ref>\t<relative age>` for every entry, in plan order.
pub fn plan_lines(plan: &SweepPlan, now: DateTime<Utc>) -> Vec<String> {
    plan.entries
        .iter()
        .map(|entry| {
            format!(
                "- {}\t{}",
                entry.tracking_ref,
                relative_age(entry.committed_at, now)
            )
        })
        .collect()
}

/// Count of selected branches, with the cutoff when age filtering is on.
pub fn summary_line(plan: &SweepPlan) -> String {
    if plan.is_empty() {
        return NOTHING_TO_SWEEP.to_string();
    }

    match plan.cutoff {
        Some(cutoff) => format!(
            "{} found with last commit before {}",
            branch_count(plan.len()),
            format_cutoff(cutoff)
        ),
        None => format!("{} found", branch_count(plan.len())),
    }
}

/// Line printed after the deletions were pushed.
pub fn removed_line(removed: usize) -> String {
    format!("{} removed", branch_count(removed))
}

/// Print the report as pretty JSON.
pub fn print_json_report(report: &SweepReport) -> Result<()> {
    println!("{}", report_json(report)?);
    Ok(())
}

/// Render the report as pretty JSON.
pub fn report_json(report: &SweepReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| SweepError::Output(format!("failed to serialize report to JSON: {}", e)))
}

fn branch_count(n: usize) -> String {
    if n == 1 {
        "1 branch".to_string()
    } else {
        format!("{} branches", n)
    }
}

fn format_cutoff(cutoff: DateTime<Utc>) -> String {
    cutoff.format("%a %b %d %Y %H:%M:%S UTC").to_string()
}

/// Human-readable distance from `then` to `now`, e.g. `3 days ago`.
///
/// Each unit is rounded to the nearest whole number and handed to the next
/// larger unit once it passes the thresholds below (45 seconds, 45 minutes,
/// 22 hours, 26 days, 11 months).
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    let minutes = rounded_div(seconds, 60);
    let hours = rounded_div(seconds, 3_600);
    let days = rounded_div(seconds, 86_400);
    // 146097 days per 400 Gregorian years, 4800 months in the same span.
    let months = rounded_div(days * 4_800, 146_097);
    let years = rounded_div(days * 400, 146_097);

    if seconds < 45 {
        "a few seconds ago".to_string()
    } else if minutes <= 1 {
        "a minute ago".to_string()
    } else if minutes < 45 {
        format!("{} minutes ago", minutes)
    } else if hours <= 1 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{} hours ago", hours)
    } else if days <= 1 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{} days ago", days)
    } else if months <= 1 {
        "a month ago".to_string()
    } else if months < 11 {
        format!("{} months ago", months)
    } else if years <= 1 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}
