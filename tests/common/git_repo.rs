//! Real-git repository fixture for integration tests
//!
//! Creates a bare "origin" repository and a working clone, mirroring the
//! checkout a CI runner would operate on.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A bare origin plus a working clone in a temp directory
pub struct TempGitRepo {
    _temp: TempDir,
    /// Path to the bare origin repository
    pub origin: PathBuf,
    /// Path to the working clone
    pub work: PathBuf,
}

impl TempGitRepo {
    /// Create the origin, clone it, and configure a committer identity
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let origin = temp.path().join("origin.git");
        let work = temp.path().join("work");

        run_git(temp.path(), &["init", "--bare", "-b", "main", "origin.git"]);
        run_git(temp.path(), &["clone", "origin.git", "work"]);

        let repo = Self {
            _temp: temp,
            origin,
            work,
        };
        repo.git(&["config", "user.name", "Fixture"]);
        repo.git(&["config", "user.email", "fixture@example.com"]);
        repo
    }

    /// Run git in the working clone, asserting success
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.work, args)
    }

    /// Write a file in the working clone
    pub fn write(&self, path: &str, content: &str) {
        std::fs::write(self.work.join(path), content).expect("write file");
    }

    /// Stage everything and commit
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-m", message]);
    }

    /// Create a branch at the current commit, switch to it, and push it
    pub fn branch_and_push(&self, name: &str) {
        self.git(&["checkout", "-b", name]);
        self.git(&["push", "-u", "origin", name]);
    }

    /// File content at a branch tip, read from the origin
    pub fn origin_show(&self, branch: &str, path: &str) -> String {
        run_git(&self.origin, &["show", &format!("{branch}:{path}")])
    }

    /// Commit ID of a branch tip on the origin
    pub fn origin_rev(&self, branch: &str) -> String {
        run_git(&self.origin, &["rev-parse", branch]).trim().to_string()
    }
}

/// Run git in a directory, panicking on failure
fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run git");

    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).into_owned()
}
