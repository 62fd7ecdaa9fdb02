//! CLI progress callback that prints styled lines to the terminal

use crate::cli::style::{Stylize, check};
use anstream::println;
use async_trait::async_trait;
use branch_relay::propagate::ProgressCallback;
use branch_relay::types::StepOutcome;

/// Prints one styled line per propagation event
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_branch_synced(&self, branch: &str) {
        println!("{} Synced {}", check(), branch.accent());
    }

    async fn on_merge_started(&self, source: &str, dest: &str) {
        println!(
            "{} {} into {}",
            "Merging".emphasis(),
            source.accent(),
            dest.accent()
        );
    }

    async fn on_merge_completed(&self, outcome: &StepOutcome) {
        if outcome.auto_resolved {
            println!(
                "{} Merged {} into {} {}",
                check(),
                outcome.source.accent(),
                outcome.dest.accent(),
                "(version marker auto-resolved)".muted()
            );
        } else {
            println!(
                "{} Merged {} into {}",
                check(),
                outcome.source.accent(),
                outcome.dest.accent()
            );
        }
    }

    async fn on_message(&self, message: &str) {
        println!("  {message}");
    }
}
