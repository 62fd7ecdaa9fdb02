//! Git capability layer
//!
//! Every git operation the resolver and propagator need is expressed on the
//! [`GitClient`] trait, so the logic can be driven by a scripted fake in
//! tests instead of a real repository. The real implementation shells out
//! to the `git` binary.

mod cli;

pub use cli::CliGit;

use crate::error::{Error, Result};
use crate::types::{Committer, ExecOutput};
use async_trait::async_trait;

/// Ref namespace prefix reported by `git ls-remote --heads`.
const HEADS_PREFIX: &str = "refs/heads/";

/// Git operations consumed by branch-relay
///
/// Commands that may legitimately exit nonzero (merge, merge --continue)
/// return the raw [`ExecOutput`] so callers can inspect the exit code.
/// Everything else treats a nonzero exit as a fatal [`Error::GitCommand`].
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Name of the configured remote (commonly "origin")
    async fn remote_name(&self) -> Result<String>;

    /// All branch names that currently exist on the remote, with the
    /// ref namespace prefix stripped
    async fn list_remote_heads(&self) -> Result<Vec<String>>;

    /// Fetch a single branch from the named remote
    async fn fetch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Check out a branch in the working copy
    async fn checkout(&self, branch: &str) -> Result<()>;

    /// Hard-reset the current branch to a ref, discarding local divergence
    async fn reset_hard(&self, target: &str) -> Result<()>;

    /// Merge a branch into the current one, always creating a merge commit
    async fn merge_no_ff(&self, branch: &str) -> Result<ExecOutput>;

    /// Paths currently in conflicted (unmerged) state
    async fn conflicted_paths(&self) -> Result<Vec<String>>;

    /// Resolve a conflicted path by keeping the current branch's copy
    async fn checkout_ours(&self, path: &str) -> Result<()>;

    /// Stage a path
    async fn stage(&self, path: &str) -> Result<()>;

    /// Continue an in-progress merge with the interactive editor suppressed
    async fn merge_continue(&self) -> Result<ExecOutput>;

    /// Push the current branch to its upstream
    async fn push(&self) -> Result<()>;

    /// Set the committer identity for generated merge commits
    async fn set_committer(&self, committer: &Committer) -> Result<()>;
}

/// Parse `git ls-remote --heads` output into bare branch names.
///
/// Each line is `<oid>\t<ref>`; the ref carries the `refs/heads/` prefix,
/// which is stripped. Any line that doesn't follow that shape is treated
/// as malformed output and fails the whole enumeration.
pub fn parse_ls_remote(stdout: &str) -> Result<Vec<String>> {
    let mut branches = Vec::new();

    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (_oid, full_ref) = line
            .split_once('\t')
            .ok_or_else(|| Error::Inventory(format!("malformed ls-remote line: {line}")))?;

        let name = full_ref
            .strip_prefix(HEADS_PREFIX)
            .ok_or_else(|| Error::Inventory(format!("unexpected ref: {full_ref}")))?;

        branches.push(name.to_string());
    }

    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ls_remote_strips_prefix() {
        let stdout = "4000297aeba4348289cd33eb1a922990ea917749\trefs/heads/release-6.7.0\n\
                      1111111111111111111111111111111111111111\trefs/heads/main\n";
        let branches = parse_ls_remote(stdout).unwrap();
        assert_eq!(branches, vec!["release-6.7.0", "main"]);
    }

    #[test]
    fn test_parse_ls_remote_skips_blank_lines() {
        let stdout = "\naaaa\trefs/heads/dev\n\n";
        let branches = parse_ls_remote(stdout).unwrap();
        assert_eq!(branches, vec!["dev"]);
    }

    #[test]
    fn test_parse_ls_remote_empty_output() {
        let branches = parse_ls_remote("").unwrap();
        assert!(branches.is_empty());
    }

    #[test]
    fn test_parse_ls_remote_missing_tab_is_malformed() {
        let result = parse_ls_remote("garbage without a tab");
        assert!(matches!(result, Err(Error::Inventory(_))));
    }

    #[test]
    fn test_parse_ls_remote_unexpected_namespace_is_malformed() {
        let result = parse_ls_remote("aaaa\trefs/tags/v1.0.0");
        assert!(matches!(result, Err(Error::Inventory(_))));
    }

    #[test]
    fn test_parse_ls_remote_branch_with_slashes() {
        let stdout = "aaaa\trefs/heads/feature/login/v2\n";
        let branches = parse_ls_remote(stdout).unwrap();
        assert_eq!(branches, vec!["feature/login/v2"]);
    }
}
