//! Progress callback trait for interface-agnostic updates

use crate::types::StepOutcome;
use async_trait::async_trait;

/// Progress callback trait
///
/// Implement this to receive updates while a propagation executes.
/// The CLI prints to the terminal; tests record calls.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called after a branch is fetched and hard-reset to the remote tip
    async fn on_branch_synced(&self, branch: &str);

    /// Called when a merge step starts
    async fn on_merge_started(&self, source: &str, dest: &str);

    /// Called when a merge step completes (clean or auto-resolved)
    async fn on_merge_completed(&self, outcome: &StepOutcome);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_branch_synced(&self, _branch: &str) {}
    async fn on_merge_started(&self, _source: &str, _dest: &str) {}
    async fn on_merge_completed(&self, _outcome: &StepOutcome) {}
    async fn on_message(&self, _message: &str) {}
}
