//! Git engine for gitsweep, backed by libgit2.
//!
//! The sweep logic talks to the repository through two traits so it can be
//! exercised against in-memory fakes:
//! - [`RefSource`]: enumerate reference names and read commit times
//! - [`VcsEngine`]: additionally fetch with prune and push ref deletions
//!
//! [`GitRepository`] implements both on top of `git2`.

mod credentials;

pub use credentials::{AuthOptions, CredentialProvider};

use crate::error::{Operation, Result, SweepError};
use chrono::{DateTime, Utc};
use git2::{ErrorCode, FetchOptions, FetchPrune, PushOptions, Remote, RemoteCallbacks, Repository};
use std::path::{Path, PathBuf};

/// Read-only access to references and the commits they point to.
pub trait RefSource {
    /// Every reference name in the repository, in enumeration order.
    fn reference_names(&self) -> Result<Vec<String>>;

    /// Committer time of the commit `refname` points to.
    fn commit_time(&self, refname: &str) -> Result<DateTime<Utc>>;
}

/// Network operations needed by a sweep.
pub trait VcsEngine: RefSource {
    /// Fetch `remote`, pruning tracking refs whose branch is gone.
    fn fetch_prune(&mut self, remote: &str, auth: AuthOptions<'_>) -> Result<()>;

    /// Push `refspecs` (each `:refs/heads/<branch>`) to `remote`.
    fn push_deletions(
        &mut self,
        remote: &str,
        refspecs: &[String],
        auth: AuthOptions<'_>,
    ) -> Result<()>;
}

/// A repository opened through libgit2.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl GitRepository {
    /// Open the repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::RepositoryNotFound` if `path` is missing or not a
    /// git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|e| SweepError::RepositoryNotFound {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        tracing::info!(path = %path.display(), "opened repository");
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    fn find_remote(&self, name: &str) -> Result<Remote<'_>> {
        self.repo.find_remote(name).map_err(|e| {
            SweepError::Configuration(format!(
                "remote '{}' is not configured in '{}': {}",
                name,
                self.path.display(),
                e.message()
            ))
        })
    }
}

impl RefSource for GitRepository {
    fn reference_names(&self) -> Result<Vec<String>> {
        let enumeration_error = |e: git2::Error| SweepError::RefResolution {
            refname: "<all references>".to_string(),
            message: e.message().to_string(),
        };

        let mut references = self.repo.references().map_err(enumeration_error)?;
        let names = references
            .names()
            .map(|name| name.map(str::to_string).map_err(enumeration_error))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = names.len(), "enumerated references");
        Ok(names)
    }

    fn commit_time(&self, refname: &str) -> Result<DateTime<Utc>> {
        let resolution_error = |message: String| SweepError::RefResolution {
            refname: refname.to_string(),
            message,
        };

        let commit = self
            .repo
            .find_reference(refname)
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| resolution_error(e.message().to_string()))?;

        let seconds = commit.time().seconds();
        DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| resolution_error(format!("commit time {} is out of range", seconds)))
    }
}

impl VcsEngine for GitRepository {
    fn fetch_prune(&mut self, remote_name: &str, auth: AuthOptions<'_>) -> Result<()> {
        let mut remote = self.find_remote(remote_name)?;
        let mut provider = CredentialProvider::new(auth);

        tracing::info!(remote = remote_name, "fetching with prune");
        let result = {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.credentials(|url, user, allowed| provider.credentials(url, user, allowed));

            let mut options = FetchOptions::new();
            options.remote_callbacks(callbacks).prune(FetchPrune::On);

            let configured_refspecs: &[&str] = &[];
            remote.fetch(configured_refspecs, Some(&mut options), None)
        };

        result.map_err(|e| classify(e, Operation::Fetch, provider.is_exhausted()))
    }

    fn push_deletions(
        &mut self,
        remote_name: &str,
        refspecs: &[String],
        auth: AuthOptions<'_>,
    ) -> Result<()> {
        let mut remote = self.find_remote(remote_name)?;
        let mut provider = CredentialProvider::new(auth);
        let mut rejected: Vec<(String, String)> = Vec::new();

        tracing::info!(remote = remote_name, count = refspecs.len(), "pushing deletions");
        let result = {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.credentials(|url, user, allowed| provider.credentials(url, user, allowed));
            callbacks.push_update_reference(|refname, status| {
                if let Some(reason) = status {
                    rejected.push((refname.to_string(), reason.to_string()));
                }
                Ok(())
            });

            let mut options = PushOptions::new();
            options.remote_callbacks(callbacks);

            remote.push(refspecs, Some(&mut options))
        };

        result.map_err(|e| classify(e, Operation::Push, provider.is_exhausted()))?;
        check_push_statuses(rejected)
    }
}

/// Fail with the first ref the remote refused to update; the rest are logged.
fn check_push_statuses(rejected: Vec<(String, String)>) -> Result<()> {
    let mut rejected = rejected.into_iter();
    let Some((refname, reason)) = rejected.next() else {
        return Ok(());
    };

    for (other, other_reason) in rejected {
        tracing::warn!(refname = %other, reason = %other_reason, "remote rejected deletion");
    }
    Err(SweepError::PushRejected { refname, reason })
}

/// Map a libgit2 network failure onto the error taxonomy.
///
/// Once the credential provider has run dry, or libgit2 reports an auth
/// error, the failure is an authentication failure; anything else is a
/// transport failure.
fn classify(err: git2::Error, operation: Operation, credentials_exhausted: bool) -> SweepError {
    if credentials_exhausted || err.code() == ErrorCode::Auth {
        SweepError::AuthenticationExhausted {
            operation,
            message: err.message().to_string(),
        }
    } else {
        SweepError::Network {
            operation,
            message: err.message().to_string(),
        }
    }
}
