//! Plan command - resolve patterns and preview the merge chain

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow, check, spinner_style};
use anstream::println;
use branch_relay::error::{Error, Result};
use branch_relay::git::GitClient;
use branch_relay::propagate::{PropagationPlan, create_propagation_plan};
use branch_relay::resolve::resolve_targets;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for the plan command
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Branch patterns from the command line
    pub patterns: Vec<String>,
    /// File with a newline-delimited pattern list
    pub branches_file: Option<PathBuf>,
    /// Remote override
    pub remote: Option<String>,
    /// Emit the plan as JSON instead of styled text
    pub json: bool,
}

/// Run the plan command
pub async fn run_plan(path: &Path, options: PlanOptions) -> Result<()> {
    let ctx = CommandContext::new(
        path,
        options.patterns,
        options.branches_file.as_ref(),
        options.remote.as_deref(),
    )
    .await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Listing branches on {}...", ctx.remote_name));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let inventory = ctx.git.list_remote_heads().await?;

    spinner.finish_with_message(format!(
        "{} Found {} remote branch(es)",
        check(),
        inventory.len()
    ));

    let resolved = resolve_targets(&ctx.patterns, &inventory)?;
    let plan = create_propagation_plan(&resolved, &ctx.remote_name, &ctx.config);

    if options.json {
        let rendered = serde_json::to_string_pretty(&plan)
            .map_err(|e| Error::Internal(format!("failed to render plan: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    print_plan(&ctx.patterns, &plan);

    Ok(())
}

/// Print the resolved chain and merge steps
pub(super) fn print_plan(patterns: &[String], plan: &PropagationPlan) {
    println!();
    println!("{}:", "Input patterns".emphasis());
    for pattern in patterns {
        println!("  - {pattern}");
    }

    println!();
    println!("{}:", "Target branches".emphasis());
    if plan.branches.is_empty() {
        println!("  {}", "(no remote branches matched)".muted());
        return;
    }
    for branch in &plan.branches {
        println!("  - {}", branch.accent());
    }

    println!();
    println!("{}:", "Merge steps".emphasis());
    if plan.is_empty() {
        println!("  {}", "(nothing to merge - single branch)".muted());
        return;
    }
    for step in &plan.steps {
        println!("  {} {step}", arrow());
    }
    println!();
}
