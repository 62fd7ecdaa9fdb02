//! Mock git client for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use branch_relay::error::{Error, Result};
use branch_relay::git::GitClient;
use branch_relay::types::{Committer, ExecOutput};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted conflict behavior for one merge, keyed by source branch
#[derive(Debug, Clone, Default)]
pub struct MergeScript {
    /// Paths left conflicted by the merge; empty means a clean merge
    pub conflicted_paths: Vec<String>,
}

/// Scripted mock git client
///
/// Manually implements [`GitClient`] with configurable responses, call
/// tracking, and error injection. Merge continuation succeeds exactly
/// when every scripted conflict has been resolved (checked out + staged),
/// mirroring how git behaves.
pub struct MockGitClient {
    remote: String,
    heads: Vec<String>,
    merge_scripts: Mutex<HashMap<String, MergeScript>>,
    unresolved: Mutex<Vec<String>>,
    /// Recorded (remote, branch) fetch calls
    pub fetch_calls: Mutex<Vec<(String, String)>>,
    /// Recorded checkout calls
    pub checkout_calls: Mutex<Vec<String>>,
    /// Recorded hard-reset targets
    pub reset_calls: Mutex<Vec<String>>,
    /// Recorded merge sources
    pub merge_calls: Mutex<Vec<String>>,
    /// Recorded take-ours resolutions
    pub checkout_ours_calls: Mutex<Vec<String>>,
    /// Recorded staged paths
    pub stage_calls: Mutex<Vec<String>>,
    /// Number of merge continuations attempted
    pub continue_count: AtomicUsize,
    /// Number of pushes performed
    pub push_count: AtomicUsize,
    /// Committer identity, once set
    pub committer: Mutex<Option<Committer>>,
    // Error injection
    error_on_fetch: Mutex<Option<String>>,
    error_on_push: Mutex<Option<String>>,
}

impl MockGitClient {
    /// Mock with the given remote branch inventory and remote "origin"
    pub fn with_heads(heads: &[&str]) -> Self {
        Self {
            remote: "origin".to_string(),
            heads: heads.iter().map(ToString::to_string).collect(),
            merge_scripts: Mutex::new(HashMap::new()),
            unresolved: Mutex::new(Vec::new()),
            fetch_calls: Mutex::new(Vec::new()),
            checkout_calls: Mutex::new(Vec::new()),
            reset_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            checkout_ours_calls: Mutex::new(Vec::new()),
            stage_calls: Mutex::new(Vec::new()),
            continue_count: AtomicUsize::new(0),
            push_count: AtomicUsize::new(0),
            committer: Mutex::new(None),
            error_on_fetch: Mutex::new(None),
            error_on_push: Mutex::new(None),
        }
    }

    /// Script the merge of `source` to conflict in the given paths
    pub fn set_merge_conflicts(&self, source: &str, paths: &[&str]) {
        self.merge_scripts.lock().unwrap().insert(
            source.to_string(),
            MergeScript {
                conflicted_paths: paths.iter().map(ToString::to_string).collect(),
            },
        );
    }

    /// Make the next fetch fail with the given stderr
    pub fn set_error_on_fetch(&self, stderr: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(stderr.to_string());
    }

    /// Make the next push fail with the given stderr
    pub fn set_error_on_push(&self, stderr: &str) {
        *self.error_on_push.lock().unwrap() = Some(stderr.to_string());
    }

    /// Branches checked out, in order
    pub fn checked_out(&self) -> Vec<String> {
        self.checkout_calls.lock().unwrap().clone()
    }

    /// Merges attempted (source branches), in order
    pub fn merges(&self) -> Vec<String> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Number of pushes performed
    pub fn pushes(&self) -> usize {
        self.push_count.load(Ordering::SeqCst)
    }

    fn ok() -> ExecOutput {
        ExecOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn conflicted(paths: &[String]) -> ExecOutput {
        ExecOutput {
            exit_code: 1,
            stdout: format!("CONFLICT (content): {}", paths.join(", ")),
            stderr: String::new(),
        }
    }
}

#[async_trait]
impl GitClient for MockGitClient {
    async fn remote_name(&self) -> Result<String> {
        Ok(self.remote.clone())
    }

    async fn list_remote_heads(&self) -> Result<Vec<String>> {
        Ok(self.heads.clone())
    }

    async fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        if let Some(stderr) = self.error_on_fetch.lock().unwrap().take() {
            return Err(Error::GitCommand {
                command: format!("fetch {remote} {branch}"),
                code: 128,
                stderr,
            });
        }
        self.fetch_calls
            .lock()
            .unwrap()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_calls.lock().unwrap().push(branch.to_string());
        Ok(())
    }

    async fn reset_hard(&self, target: &str) -> Result<()> {
        self.reset_calls.lock().unwrap().push(target.to_string());
        Ok(())
    }

    async fn merge_no_ff(&self, branch: &str) -> Result<ExecOutput> {
        self.merge_calls.lock().unwrap().push(branch.to_string());

        let script = self
            .merge_scripts
            .lock()
            .unwrap()
            .get(branch)
            .cloned()
            .unwrap_or_default();

        if script.conflicted_paths.is_empty() {
            Ok(Self::ok())
        } else {
            *self.unresolved.lock().unwrap() = script.conflicted_paths.clone();
            Ok(Self::conflicted(&script.conflicted_paths))
        }
    }

    async fn conflicted_paths(&self) -> Result<Vec<String>> {
        Ok(self.unresolved.lock().unwrap().clone())
    }

    async fn checkout_ours(&self, path: &str) -> Result<()> {
        self.checkout_ours_calls
            .lock()
            .unwrap()
            .push(path.to_string());
        Ok(())
    }

    async fn stage(&self, path: &str) -> Result<()> {
        self.stage_calls.lock().unwrap().push(path.to_string());
        // Staging a resolved path clears its conflict
        self.unresolved.lock().unwrap().retain(|p| p != path);
        Ok(())
    }

    async fn merge_continue(&self) -> Result<ExecOutput> {
        self.continue_count.fetch_add(1, Ordering::SeqCst);

        let unresolved = self.unresolved.lock().unwrap().clone();
        if unresolved.is_empty() {
            Ok(Self::ok())
        } else {
            Ok(ExecOutput {
                exit_code: 128,
                stdout: String::new(),
                stderr: format!("error: unmerged files: {}", unresolved.join(", ")),
            })
        }
    }

    async fn push(&self) -> Result<()> {
        if let Some(stderr) = self.error_on_push.lock().unwrap().take() {
            return Err(Error::GitCommand {
                command: "push".to_string(),
                code: 1,
                stderr,
            });
        }
        self.push_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_committer(&self, committer: &Committer) -> Result<()> {
        *self.committer.lock().unwrap() = Some(committer.clone());
        Ok(())
    }
}
