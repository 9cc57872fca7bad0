//! Repository detection for `dottmpl-git`.
//!
//! [`RepoLocator`] answers three questions about the working tree containing
//! a directory: is it a git work tree, where is its top level, and which
//! GitHub `owner/repo` does its `origin` remote point at. Every answer comes
//! from invoking git through a [`GitRunner`]; only exit status and stdout are
//! inspected, never stderr.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use dottmpl_core::types::RepositoryIdentity;
use thiserror::Error;

/// Prefix stripped from the `origin` URL. No other scheme is recognised.
pub const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit status was zero.
    pub success: bool,
    pub stdout: String,
}

/// Runs git with `args` inside `dir`.
pub trait GitRunner {
    /// `Err` means git could not be started at all.
    fn run(&self, dir: &Path, args: &[&str]) -> std::io::Result<GitOutput>;
}

/// Invokes the `git` executable from `$PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, dir: &Path, args: &[&str]) -> std::io::Result<GitOutput> {
        tracing::debug!("git {} (in {})", args.join(" "), dir.display());
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Errors from repository detection.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository")]
    NotARepository,

    #[error("unable to get remote origin URL")]
    NoRemoteUrl,

    #[error("invalid GitHub URL '{url}'; expected https://github.com/<owner>/<repo>[.git]")]
    InvalidRemoteUrl { url: String },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Locates the git working tree containing `dir`.
#[derive(Debug, Clone)]
pub struct RepoLocator<G = SystemGit> {
    git: G,
    dir: PathBuf,
}

impl RepoLocator<SystemGit> {
    /// Locator using the system `git` binary.
    pub fn system(dir: impl Into<PathBuf>) -> Self {
        RepoLocator::new(SystemGit, dir)
    }
}

impl<G: GitRunner> RepoLocator<G> {
    pub fn new(git: G, dir: impl Into<PathBuf>) -> Self {
        RepoLocator {
            git,
            dir: dir.into(),
        }
    }

    /// Directory git is run from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `true` iff `dir` is inside a work tree. Any invocation failure,
    /// including a missing git binary, counts as `false`.
    pub fn is_repository(&self) -> bool {
        self.git
            .run(&self.dir, &["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.success)
            .unwrap_or(false)
    }

    /// Absolute top-level directory of the work tree.
    pub fn root(&self) -> Result<PathBuf, GitError> {
        let out = self
            .git
            .run(&self.dir, &["rev-parse", "--show-toplevel"])
            .map_err(|_| GitError::NotARepository)?;
        let root = out.stdout.trim();
        if !out.success || root.is_empty() {
            return Err(GitError::NotARepository);
        }
        Ok(PathBuf::from(root))
    }

    /// `(owner, repo)` from the `origin` remote URL.
    pub fn owner_and_repo(&self) -> Result<RepositoryIdentity, GitError> {
        let out = self
            .git
            .run(&self.dir, &["config", "--get", "remote.origin.url"])
            .map_err(|_| GitError::NoRemoteUrl)?;
        if !out.success {
            return Err(GitError::NoRemoteUrl);
        }
        parse_remote_url(out.stdout.trim())
    }
}

/// Parse `https://github.com/<owner>/<repo>[.git]`.
///
/// After stripping the prefix and `.git` suffix the remainder must split on
/// `/` into exactly two non-empty segments. Other schemes are not
/// recognised: `git@github.com:o/r.git` yields owner `git@github.com:o`.
pub fn parse_remote_url(url: &str) -> Result<RepositoryIdentity, GitError> {
    let trimmed = url.strip_prefix(GITHUB_HTTPS_PREFIX).unwrap_or(url);
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let invalid = || GitError::InvalidRemoteUrl {
        url: url.to_owned(),
    };
    let mut parts = trimmed.split('/');
    let (Some(owner), Some(repo), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if owner.is_empty() || repo.is_empty() {
        return Err(invalid());
    }
    Ok(RepositoryIdentity {
        owner: owner.to_owned(),
        repo: repo.to_owned(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
