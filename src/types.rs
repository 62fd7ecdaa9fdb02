//! Core types for branch-relay

use serde::{Deserialize, Serialize};

/// Committer identity used for generated merge commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committer {
    /// Committer name (e.g. "branch-relay bot")
    pub name: String,
    /// Committer email; "<>" leaves the address empty
    pub email: String,
}

impl Default for Committer {
    fn default() -> Self {
        Self {
            name: "branch-relay bot".to_string(),
            email: "<>".to_string(),
        }
    }
}

/// Output captured from a git invocation
#[derive(Debug, Clone, Default)]
pub struct ExecOutput {
    /// Process exit code (0 on success)
    pub exit_code: i32,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl ExecOutput {
    /// Whether the command exited cleanly
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of a single merge step, kept only for the duration of the step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Branch merged from
    pub source: String,
    /// Branch merged into
    pub dest: String,
    /// Whether the merge reported conflicts
    pub conflicted: bool,
    /// Whether conflicts were confined to the whitelist and resolved in place
    pub auto_resolved: bool,
}

impl StepOutcome {
    /// A step that merged cleanly with no conflict
    pub fn clean(source: &str, dest: &str) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
            conflicted: false,
            auto_resolved: false,
        }
    }

    /// A step whose conflicts were confined to the whitelist
    pub fn recovered(source: &str, dest: &str) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
            conflicted: true,
            auto_resolved: true,
        }
    }
}
