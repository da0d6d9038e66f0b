//! One-shot credential negotiation for fetch and push.
//!
//! libgit2 calls the credential callback again after every rejected
//! attempt. A [`CredentialProvider`] lives for exactly one network operation
//! and offers each credential kind at most once: plaintext username/password
//! when a password is configured, the SSH agent otherwise. Once it has
//! nothing left to offer, the callback fails and libgit2 gives up.

use git2::{Cred, CredentialType};
use secrecy::{ExposeSecret, SecretString};

/// Username used when neither the configuration nor the remote URL names one.
pub const DEFAULT_USERNAME: &str = "git";

/// Credential kinds already offered during one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthTrials {
    pub tried_agent: bool,
    pub tried_plaintext: bool,
}

impl AuthTrials {
    fn record(&mut self, kind: CredentialKind) {
        match kind {
            CredentialKind::SshAgent => self.tried_agent = true,
            CredentialKind::Plaintext => self.tried_plaintext = true,
        }
    }
}

/// A kind of credential that can be offered to the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    SshAgent,
    Plaintext,
}

/// Decide what to offer next, given what has already been tried.
///
/// The SSH agent is never tried when a password is configured.
pub fn next_credential(trials: AuthTrials, has_password: bool) -> Option<CredentialKind> {
    if has_password {
        (!trials.tried_plaintext).then_some(CredentialKind::Plaintext)
    } else {
        (!trials.tried_agent).then_some(CredentialKind::SshAgent)
    }
}

/// Borrowed authentication settings shared by fetch and push.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthOptions<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a SecretString>,
}

/// Credential state for a single fetch or push.
#[derive(Debug)]
pub struct CredentialProvider<'a> {
    auth: AuthOptions<'a>,
    trials: AuthTrials,
    exhausted: bool,
}

impl<'a> CredentialProvider<'a> {
    pub fn new(auth: AuthOptions<'a>) -> Self {
        Self {
            auth,
            trials: AuthTrials::default(),
            exhausted: false,
        }
    }

    /// Take the next credential kind, recording it as tried.
    pub fn next_offer(&mut self) -> Option<CredentialKind> {
        let offer = next_credential(self.trials, self.auth.password.is_some());
        match offer {
            Some(kind) => self.trials.record(kind),
            None => self.exhausted = true,
        }
        offer
    }

    /// Returns `true` once the provider has declined to offer anything.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The libgit2 credential callback.
    ///
    /// A username-only request (SSH URLs without a user) is answered without
    /// consuming a trial.
    pub fn credentials(
        &mut self,
        url: &str,
        username_from_url: Option<&str>,
        allowed: CredentialType,
    ) -> Result<Cred, git2::Error> {
        let username = self
            .auth
            .username
            .or(username_from_url)
            .unwrap_or(DEFAULT_USERNAME);

        if allowed.contains(CredentialType::USERNAME) {
            return Cred::username(username);
        }

        match self.next_offer() {
            Some(CredentialKind::SshAgent) => {
                tracing::debug!(url, username, "offering ssh-agent credentials");
                Cred::ssh_key_from_agent(username)
            }
            Some(CredentialKind::Plaintext) => {
                tracing::debug!(url, username, "offering plaintext credentials");
                let password = self
                    .auth
                    .password
                    .map(|p| p.expose_secret())
                    .unwrap_or_default();
                Cred::userpass_plaintext(username, password)
            }
            None => {
                tracing::warn!(url, "no more credentials to offer");
                Err(git2::Error::from_str("no more credentials to offer"))
            }
        }
    }
}
