//! Propagation planning - pure functions for creating merge plans
//!
//! No I/O happens here; the resolved branch sequence and run settings are
//! passed in, making the plan easy to unit test.

use crate::config::RelayConfig;
use crate::types::Committer;
use serde::Serialize;

/// One merge in the chain: `source` is merged into `dest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStep {
    /// Branch merged from (the previous branch in the sequence)
    pub source: String,
    /// Branch merged into (the current branch in the sequence)
    pub dest: String,
}

impl std::fmt::Display for MergeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "merge {} into {}", self.source, self.dest)
    }
}

/// Propagation plan - the functional core output
///
/// A pure data structure describing the full run: which branches get
/// synchronized and which merges happen, in order. Created by
/// [`create_propagation_plan`] and executed by
/// [`execute_propagation`](super::execute_propagation).
#[derive(Debug, Clone, Serialize)]
pub struct PropagationPlan {
    /// Resolved branches, oldest/base first
    pub branches: Vec<String>,
    /// Merge steps, one per adjacent branch pair
    pub steps: Vec<MergeStep>,
    /// Remote to fetch from and push to
    pub remote: String,
    /// Paths whose conflicts resolve automatically to the destination's copy
    pub auto_resolve: Vec<String>,
    /// Identity for generated merge commits
    pub committer: Committer,
}

impl PropagationPlan {
    /// Check whether the plan performs any merges
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of merges the plan will perform
    pub fn merge_count(&self) -> usize {
        self.steps.len()
    }
}

/// Create a propagation plan (PURE - no I/O, easily testable)
///
/// Each adjacent pair in the resolved sequence becomes one merge step,
/// earlier branch into later branch. A sequence of length zero or one
/// yields no steps: the branches are still synchronized, but nothing
/// precedes them to merge in.
pub fn create_propagation_plan(
    branches: &[String],
    remote: &str,
    config: &RelayConfig,
) -> PropagationPlan {
    let steps = branches
        .windows(2)
        .map(|pair| MergeStep {
            source: pair[0].clone(),
            dest: pair[1].clone(),
        })
        .collect();

    PropagationPlan {
        branches: branches.to_vec(),
        steps,
        remote: remote.to_string(),
        auto_resolve: config.merge.auto_resolve.clone(),
        committer: config.committer.clone(),
    }
}
