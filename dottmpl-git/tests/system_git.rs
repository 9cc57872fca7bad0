//! `RepoLocator` against a real `git` binary. Skipped when git is not installed.

use std::path::Path;
use std::process::Command;

use dottmpl_git::{GitError, RepoLocator};
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("run git");
    assert!(status.success(), "git {args:?} failed");
}

#[test]
fn detects_repository_root_and_remote() {
    if !git_available() {
        eprintln!("git not installed; skipping");
        return;
    }
    let repo = TempDir::new().expect("tempdir");
    git(repo.path(), &["init", "-q"]);
    git(
        repo.path(),
        &["remote", "add", "origin", "https://github.com/testuser/testrepo.git"],
    );
    let nested = repo.path().join("a").join("b");
    std::fs::create_dir_all(&nested).expect("mkdir");

    let locator = RepoLocator::system(&nested);
    assert!(locator.is_repository());

    let root = locator.root().expect("root");
    assert_eq!(
        root.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );

    let id = locator.owner_and_repo().expect("owner and repo");
    assert_eq!(id.owner, "testuser");
    assert_eq!(id.repo, "testrepo");
}

#[test]
fn repository_without_origin_has_no_remote_url() {
    if !git_available() {
        eprintln!("git not installed; skipping");
        return;
    }
    let repo = TempDir::new().expect("tempdir");
    git(repo.path(), &["init", "-q"]);

    let err = RepoLocator::system(repo.path()).owner_and_repo().unwrap_err();
    assert!(matches!(err, GitError::NoRemoteUrl), "got: {err}");
}

#[test]
fn ssh_remote_passes_through_unrecognised() {
    if !git_available() {
        eprintln!("git not installed; skipping");
        return;
    }
    let repo = TempDir::new().expect("tempdir");
    git(repo.path(), &["init", "-q"]);
    git(
        repo.path(),
        &["remote", "add", "origin", "git@github.com:testuser/testrepo.git"],
    );

    let id = RepoLocator::system(repo.path()).owner_and_repo().unwrap();
    assert_eq!(id.owner, "git@github.com:testuser");
    assert_eq!(id.repo, "testrepo");
}
