//! `~` and `~username` path expansion.
//!
//! | Input            | Result                               |
//! |------------------|--------------------------------------|
//! | `""`             | `PathError::EmptyPath`               |
//! | `~`              | `$HOME`                              |
//! | `~/rest`         | `$HOME/rest`                         |
//! | `~user/rest`     | `<user's home>/rest` via lookup      |
//! | anything else    | returned unchanged                   |
//!
//! Account lookups go through [`AccountLookup`] so tests can supply fake
//! users. Nothing is cached; every call performs a fresh lookup.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::PathError;

// ---------------------------------------------------------------------------
// Account lookup seam
// ---------------------------------------------------------------------------

/// Resolves a login name to its home directory.
pub trait AccountLookup {
    /// `Err` carries a human-readable reason for the failed lookup.
    fn home_dir(&self, username: &str) -> Result<PathBuf, String>;
}

impl<F> AccountLookup for F
where
    F: Fn(&str) -> Result<PathBuf, String>,
{
    fn home_dir(&self, username: &str) -> Result<PathBuf, String> {
        self(username)
    }
}

/// Looks accounts up in the system user database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccounts;

#[cfg(unix)]
impl AccountLookup for SystemAccounts {
    fn home_dir(&self, username: &str) -> Result<PathBuf, String> {
        match nix::unistd::User::from_name(username) {
            Ok(Some(user)) => Ok(user.dir),
            Ok(None) => Err(format!("unknown user {username}")),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(not(unix))]
impl AccountLookup for SystemAccounts {
    fn home_dir(&self, username: &str) -> Result<PathBuf, String> {
        Err(format!("cannot look up user {username} on this platform"))
    }
}

// ---------------------------------------------------------------------------
// PathResolver
// ---------------------------------------------------------------------------

/// Expands leading `~` / `~user` prefixes.
#[derive(Debug, Clone)]
pub struct PathResolver<A = SystemAccounts> {
    home: Option<PathBuf>,
    accounts: A,
}

impl PathResolver<SystemAccounts> {
    /// Resolver reading `$HOME` (falling back to `dirs::home_dir()`) and the
    /// system user database.
    pub fn from_env() -> Self {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        PathResolver::new(home, SystemAccounts)
    }
}

impl<A: AccountLookup> PathResolver<A> {
    pub fn new(home: Option<PathBuf>, accounts: A) -> Self {
        PathResolver { home, accounts }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        if rest.is_empty() || rest.starts_with('/') {
            let home = self.home.as_ref().ok_or(PathError::HomeNotFound)?;
            let mut expanded = OsString::from(home.as_os_str());
            expanded.push(rest);
            tracing::debug!("expanded {path} to {}", PathBuf::from(&expanded).display());
            return Ok(PathBuf::from(expanded));
        }

        let (username, in_home) = rest.split_once('/').unwrap_or((rest, ""));
        let home = self
            .accounts
            .home_dir(username)
            .map_err(|message| PathError::UserNotFound {
                username: username.to_owned(),
                message,
            })?;
        tracing::debug!("resolved ~{username} to {}", home.display());
        if in_home.is_empty() {
            Ok(home)
        } else {
            Ok(home.join(in_home))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_accounts(username: &str) -> Result<PathBuf, String> {
        match username {
            "testuser" => Ok(PathBuf::from("/home/testuser")),
            _ => Err("user not found".to_string()),
        }
    }

    type FakeLookup = fn(&str) -> Result<PathBuf, String>;

    fn resolver() -> PathResolver<FakeLookup> {
        PathResolver::new(Some(PathBuf::from("/mock/home")), fake_accounts as FakeLookup)
    }

    #[test]
    fn empty_path_fails() {
        assert!(matches!(resolver().expand(""), Err(PathError::EmptyPath)));
    }

    #[test]
    fn bare_tilde_is_home() {
        assert_eq!(resolver().expand("~").unwrap(), PathBuf::from("/mock/home"));
    }

    #[test]
    fn tilde_slash_keeps_remainder() {
        assert_eq!(
            resolver().expand("~/test/path").unwrap(),
            PathBuf::from("/mock/home/test/path")
        );
    }

    #[test]
    fn tilde_user_joins_looked_up_home() {
        assert_eq!(
            resolver().expand("~testuser/test/path").unwrap(),
            PathBuf::from("/home/testuser/test/path")
        );
        assert_eq!(
            resolver().expand("~testuser").unwrap(),
            PathBuf::from("/home/testuser")
        );
    }

    #[test]
    fn unknown_user_propagates_lookup_message() {
        let err = resolver().expand("~nosuchuser/test/path").unwrap_err();
        match err {
            PathError::UserNotFound { username, message } => {
                assert_eq!(username, "nosuchuser");
                assert_eq!(message, "user not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_home_fails_for_tilde_only() {
        let r = PathResolver::new(None, fake_accounts);
        assert!(matches!(r.expand("~/x"), Err(PathError::HomeNotFound)));
        assert_eq!(
            r.expand("~testuser/x").unwrap(),
            PathBuf::from("/home/testuser/x")
        );
    }
}
