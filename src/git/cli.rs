//! `GitClient` implementation backed by the `git` binary

use super::{GitClient, parse_ls_remote};
use crate::error::{Error, Result};
use crate::types::{Committer, ExecOutput};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Runs git commands in a working directory via subprocess.
///
/// Holds no state beyond the directory; every operation is one `git`
/// invocation with captured stdout/stderr.
#[derive(Debug, Clone, Default)]
pub struct CliGit {
    workdir: Option<PathBuf>,
}

impl CliGit {
    /// Client operating in the process's current directory
    pub const fn new() -> Self {
        Self { workdir: None }
    }

    /// Client operating in the given directory
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }

    /// Run `git` with the given arguments, capturing output.
    ///
    /// Nonzero exits are returned to the caller, not treated as errors;
    /// use [`Self::run_checked`] when success is required.
    async fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> Result<ExecOutput> {
        debug!("git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output().await?;

        let result = ExecOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            debug!(
                "git {} exited {}: {}",
                args.join(" "),
                result.exit_code,
                result.stderr.trim()
            );
        }

        Ok(result)
    }

    /// Run `git`, failing with [`Error::GitCommand`] on a nonzero exit
    async fn run_checked(&self, args: &[&str]) -> Result<ExecOutput> {
        let output = self.run(args, &[]).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(Error::GitCommand {
                command: args.join(" "),
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl GitClient for CliGit {
    async fn remote_name(&self) -> Result<String> {
        let output = self.run_checked(&["remote"]).await?;
        // `git remote` lists one name per line; a single remote is assumed
        output
            .stdout
            .lines()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| Error::Inventory("repository has no configured remote".to_string()))
    }

    async fn list_remote_heads(&self) -> Result<Vec<String>> {
        let output = self
            .run(&["ls-remote", "--heads"], &[])
            .await?;
        if !output.success() {
            return Err(Error::Inventory(output.stderr.trim().to_string()));
        }
        parse_ls_remote(&output.stdout)
    }

    async fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_checked(&["fetch", remote, branch]).await?;
        Ok(())
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", branch]).await?;
        Ok(())
    }

    async fn reset_hard(&self, target: &str) -> Result<()> {
        self.run_checked(&["reset", "--hard", target]).await?;
        Ok(())
    }

    async fn merge_no_ff(&self, branch: &str) -> Result<ExecOutput> {
        self.run(&["merge", "--no-ff", "--no-edit", branch], &[])
            .await
    }

    async fn conflicted_paths(&self) -> Result<Vec<String>> {
        let output = self
            .run_checked(&["diff", "--name-only", "--diff-filter=U"])
            .await?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    async fn checkout_ours(&self, path: &str) -> Result<()> {
        self.run_checked(&["checkout", "--ours", "--", path])
            .await?;
        Ok(())
    }

    async fn stage(&self, path: &str) -> Result<()> {
        self.run_checked(&["add", "--", path]).await?;
        Ok(())
    }

    async fn merge_continue(&self) -> Result<ExecOutput> {
        // GIT_EDITOR must be suppressed so the continuation can commit
        // without opening an editor
        self.run(&["merge", "--continue"], &[("GIT_EDITOR", "true")])
            .await
    }

    async fn push(&self) -> Result<()> {
        self.run_checked(&["push"]).await?;
        Ok(())
    }

    async fn set_committer(&self, committer: &Committer) -> Result<()> {
        self.run_checked(&["config", "user.name", &committer.name])
            .await?;
        self.run_checked(&["config", "user.email", &committer.email])
            .await?;
        Ok(())
    }
}
