//! Ignore list resolution.
//!
//! Ignore entries are remote-relative names such as `origin/master`. They
//! come from three places: the built-in default, the command line (plus the
//! settings file), and the optional `.gitsweepignore` file at the repository
//! root. All of them are unioned into one [`IgnoreSet`].

use crate::error::{Result, SweepError};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

/// File name of the per-repository ignore list.
pub const IGNORE_FILE_NAME: &str = ".gitsweepignore";

/// Entry that is always ignored.
pub const DEFAULT_IGNORE: &str = "origin/master";

const REMOTES_PREFIX: &str = "refs/remotes/";

/// Strip a leading `refs/remotes/` so `refs/remotes/origin/x` compares equal to `origin/x`.
pub fn strip_remotes_prefix(name: &str) -> &str {
    name.strip_prefix(REMOTES_PREFIX).unwrap_or(name)
}

/// Set of reference names that must never be swept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: BTreeSet<String>,
}

impl IgnoreSet {
    /// Returns `true` if `refname` (qualified or remote-relative) is ignored.
    pub fn contains(&self, refname: &str) -> bool {
        self.entries.contains(strip_remotes_prefix(refname))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|s| strip_remotes_prefix(s.as_ref()).to_string())
                .collect(),
        }
    }
}

/// Union the three ignore sources into one set.
///
/// Order does not matter and duplicates collapse. Entries given in
/// `refs/remotes/<remote>/<branch>` form are normalized to `<remote>/<branch>`.
pub fn resolve<S: AsRef<str>, T: AsRef<str>>(
    repo_config_ignores: &[S],
    cli_ignores: &[T],
    default_ignore: &str,
) -> IgnoreSet {
    repo_config_ignores
        .iter()
        .map(AsRef::as_ref)
        .chain(cli_ignores.iter().map(AsRef::as_ref))
        .chain(std::iter::once(default_ignore))
        .collect()
}

/// Read `<repo_path>/.gitsweepignore`.
///
/// One entry per line. Whitespace around each line is trimmed and blank lines
/// are skipped. A missing file, or a `repo_path` that is not a directory,
/// yields an empty list.
///
/// # Errors
///
/// Returns `SweepError::Configuration` if the file exists but cannot be read.
pub fn read_ignore_file(repo_path: &Path) -> Result<Vec<String>> {
    let path = repo_path.join(IGNORE_FILE_NAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::debug!(path = %path.display(), "no ignore file");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(SweepError::Configuration(format!(
                "failed to read ignore file '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!(path = %path.display(), count = entries.len(), "loaded ignore file");
    Ok(entries)
}
