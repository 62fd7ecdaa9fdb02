//! Propagation execution - effectful operations
//!
//! Takes a [`PropagationPlan`] and walks the branch chain: each branch is
//! synchronized to its remote tip, then the previous branch is merged in.
//! Conflicts confined to the auto-resolve whitelist are resolved by keeping
//! the destination branch's copy; anything else stops the run.

use crate::error::Result;
use crate::git::GitClient;
use crate::propagate::plan::{MergeStep, PropagationPlan};
use crate::propagate::progress::ProgressCallback;
use crate::types::StepOutcome;
use tracing::debug;

/// Result of propagation execution
#[derive(Debug, Clone, Default)]
pub struct PropagationResult {
    /// Branches that were fetched and hard-reset to the remote tip
    pub synced_branches: Vec<String>,
    /// Outcomes of completed merge steps, in order
    pub outcomes: Vec<StepOutcome>,
    /// Step where the run stopped on an unrecoverable conflict (if any)
    pub failed_step: Option<MergeStep>,
    /// Failure message naming the branches involved (if any)
    pub error_message: Option<String>,
}

impl PropagationResult {
    /// Check if the whole chain propagated
    pub const fn is_success(&self) -> bool {
        self.failed_step.is_none()
    }

    /// Number of merge steps that completed
    pub fn merge_count(&self) -> usize {
        self.outcomes.len()
    }
}

/// Execute a propagation plan (EFFECTFUL)
///
/// Walks the branch sequence in order. For each branch: fetch, checkout,
/// hard-reset to the remote tip (the working copy may hold stale or
/// locally-modified state from a previous step). The first branch stops
/// there; every later branch then merges the preceding one with `--no-ff`
/// and pushes on success.
///
/// An unrecoverable conflict stops the run: the result carries the failed
/// step and a message naming both branches, no further positions are
/// processed, and nothing further is pushed. Any other git failure
/// propagates as an error.
pub async fn execute_propagation(
    plan: &PropagationPlan,
    git: &dyn GitClient,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<PropagationResult> {
    let mut result = PropagationResult::default();

    if dry_run {
        progress.on_message("Dry run - no changes will be made").await;
        report_dry_run(plan, progress).await;
        return Ok(result);
    }

    // Merge commits need an identity before the first merge
    git.set_committer(&plan.committer).await?;

    for (index, branch) in plan.branches.iter().enumerate() {
        git.fetch(&plan.remote, branch).await?;
        git.checkout(branch).await?;
        git.reset_hard(&format!("{}/{branch}", plan.remote)).await?;
        progress.on_branch_synced(branch).await;
        result.synced_branches.push(branch.clone());

        // Nothing precedes the first branch
        if index == 0 {
            continue;
        }

        let step = &plan.steps[index - 1];
        progress.on_merge_started(&step.source, &step.dest).await;

        let merge = git.merge_no_ff(&step.source).await?;

        let outcome = if merge.success() {
            StepOutcome::clean(&step.source, &step.dest)
        } else {
            match resolve_conflicts(step, plan, git).await? {
                Some(outcome) => outcome,
                None => {
                    let message = format!("Failed to merge {} into {}", step.source, step.dest);
                    progress.on_message(&message).await;
                    result.failed_step = Some(step.clone());
                    result.error_message = Some(message);
                    return Ok(result);
                }
            }
        };

        git.push().await?;
        progress.on_merge_completed(&outcome).await;
        result.outcomes.push(outcome);
    }

    Ok(result)
}

/// Attempt to recover from merge conflicts via the whitelist.
///
/// Whitelisted conflicted paths are resolved by keeping the destination
/// branch's copy, then the merge is continued. Returns `Some(outcome)`
/// when the continuation succeeds (all conflicts were whitelisted) and
/// `None` when it doesn't - the caller turns that into the terminal
/// failure.
async fn resolve_conflicts(
    step: &MergeStep,
    plan: &PropagationPlan,
    git: &dyn GitClient,
) -> Result<Option<StepOutcome>> {
    let conflicted = git.conflicted_paths().await?;
    debug!(
        "merge of {} into {} conflicted in: {conflicted:?}",
        step.source, step.dest
    );

    for path in &conflicted {
        if plan.auto_resolve.iter().any(|allowed| allowed == path) {
            git.checkout_ours(path).await?;
            git.stage(path).await?;
        }
    }

    // Fails if any conflict outside the whitelist remains
    let continued = git.merge_continue().await?;
    if continued.success() {
        Ok(Some(StepOutcome::recovered(&step.source, &step.dest)))
    } else {
        Ok(None)
    }
}

/// Report what would be done in a dry run
async fn report_dry_run(plan: &PropagationPlan, progress: &dyn ProgressCallback) {
    for branch in &plan.branches {
        progress
            .on_message(&format!("Would sync {branch} to {}/{branch}", plan.remote))
            .await;
    }

    if plan.is_empty() {
        progress.on_message("Nothing to merge - chain has fewer than two branches").await;
        return;
    }

    for step in &plan.steps {
        progress
            .on_message(&format!("Would {step}, then push"))
            .await;
    }
}
