//! Merge propagation engine
//!
//! Two-phase pattern:
//! 1. Plan - turn the resolved branch sequence into merge steps (pure, testable)
//! 2. Execute - sync each branch and merge it forward (effectful)

mod execute;
mod plan;
mod progress;

pub use execute::{PropagationResult, execute_propagation};
pub use plan::{MergeStep, PropagationPlan, create_propagation_plan};
pub use progress::{NoopProgress, ProgressCallback};
