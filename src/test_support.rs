use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A bare `origin` repository and a clone of it that tracks its branches.
pub(crate) struct SweepFixture {
    _temp_dir: TempDir,
    pub(crate) origin: PathBuf,
    pub(crate) local: PathBuf,
}

impl SweepFixture {
    /// Branch names currently on the origin.
    pub(crate) fn origin_branches(&self) -> Vec<String> {
        let output = git_output(
            &self.origin,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
        );
        output.lines().map(str::to_string).collect()
    }

    /// Delete a branch directly on the origin, behind the clone's back.
    pub(crate) fn delete_origin_branch(&self, branch: &str) {
        git(&self.origin, &["branch", "-D", branch]);
    }

    /// Register another remote in the clone.
    pub(crate) fn add_remote(&self, name: &str, url: &Path) {
        let url = url.to_string_lossy().to_string();
        git(&self.local, &["remote", "add", name, &url]);
    }
}

pub(crate) fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// Build an origin holding one commit per branch, dated `days` old, and clone it.
///
/// The first entry must be `master`; every other branch forks from it.
pub(crate) fn create_sweep_fixture(branches: &[(&str, i64)]) -> SweepFixture {
    assert_eq!(
        branches.first().map(|(name, _)| *name),
        Some("master"),
        "fixture needs master first"
    );

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let origin = root.join("origin.git");
    let seed = root.join("seed");
    let local = root.join("local");

    git(root, &["init", "--bare", "origin.git"]);
    git(&origin, &["symbolic-ref", "HEAD", "refs/heads/master"]);

    std::fs::create_dir_all(&seed).unwrap();
    git(&seed, &["init"]);
    // Deterministic default branch regardless of init.defaultBranch.
    git(&seed, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    git(&seed, &["config", "user.email", "test@example.com"]);
    git(&seed, &["config", "user.name", "Test User"]);
    git(&seed, &["config", "commit.gpgsign", "false"]);

    for (i, (branch, age_days)) in branches.iter().enumerate() {
        if i > 0 {
            git(&seed, &["checkout", "-q", "-b", branch, "master"]);
        }
        std::fs::write(seed.join(format!("{}.txt", branch)), format!("{}\n", branch)).unwrap();
        git(&seed, &["add", "."]);
        commit_dated(&seed, &format!("Work on {}", branch), days_ago(*age_days));
        if i > 0 {
            git(&seed, &["checkout", "-q", "master"]);
        }
    }

    let origin_url = origin.to_string_lossy().to_string();
    git(&seed, &["remote", "add", "origin", &origin_url]);
    git(&seed, &["push", "-q", "origin", "--all"]);

    let local_str = local.to_string_lossy().to_string();
    git(root, &["clone", "-q", &origin_url, &local_str]);

    SweepFixture {
        _temp_dir: temp_dir,
        origin,
        local,
    }
}

fn commit_dated(repo_dir: &Path, message: &str, when: DateTime<Utc>) {
    let date = format!("{} +0000", when.timestamp());
    let output = Command::new("git")
        .current_dir(repo_dir)
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .args(["commit", "-q", "-m", message])
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git commit: {}", e));
    assert!(
        output.status.success(),
        "git commit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn git_output(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}

fn git(repo_dir: &Path, args: &[&str]) {
    git_output(repo_dir, args);
}
