//! CLI commands
//!
//! Command implementations for the `relay` binary.

mod context;
mod plan;
mod progress;
mod run;
mod style;

pub use plan::{PlanOptions, run_plan};
pub use progress::CliProgress;
pub use run::{RunOptions, run_propagate};
