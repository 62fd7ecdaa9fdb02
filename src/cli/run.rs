//! Run command - resolve the chain and propagate merges down it

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::plan::print_plan;
use crate::cli::style::{CHECK, Stylize, check, spinner_style};
use anstream::println;
use branch_relay::error::{Error, Result};
use branch_relay::git::GitClient;
use branch_relay::propagate::{create_propagation_plan, execute_propagation};
use branch_relay::report::{ActionsReporter, RunReporter};
use branch_relay::resolve::resolve_targets;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Branch patterns from the command line
    pub patterns: Vec<String>,
    /// File with a newline-delimited pattern list
    pub branches_file: Option<PathBuf>,
    /// Remote override
    pub remote: Option<String>,
    /// Show what would be done without making changes
    pub dry_run: bool,
    /// Preview the plan and prompt for confirmation before executing
    pub confirm: bool,
}

/// Run the propagation command
pub async fn run_propagate(path: &Path, options: RunOptions) -> Result<()> {
    // =========================================================================
    // Phase 1: GATHER - remote inventory
    // =========================================================================

    let ctx = CommandContext::new(
        path,
        options.patterns,
        options.branches_file.as_ref(),
        options.remote.as_deref(),
    )
    .await?;

    let reporter = ActionsReporter::from_env();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Listing branches on {}...", ctx.remote_name));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let inventory = match ctx.git.list_remote_heads().await {
        Ok(inventory) => {
            spinner.finish_with_message(format!(
                "{} Found {} remote branch(es)",
                check(),
                inventory.len()
            ));
            inventory
        }
        Err(e) => {
            spinner.finish_and_clear();
            return fail(&reporter, e);
        }
    };

    // =========================================================================
    // Phase 2: PLAN - pure resolution, easily testable
    // =========================================================================

    let resolved = match resolve_targets(&ctx.patterns, &inventory) {
        Ok(resolved) => resolved,
        Err(e) => return fail(&reporter, e),
    };
    let plan = create_propagation_plan(&resolved, &ctx.remote_name, &ctx.config);

    print_plan(&ctx.patterns, &plan);

    if plan.branches.is_empty() {
        println!("{}", "No remote branches matched - nothing to do.".muted());
        return Ok(());
    }

    if options.confirm && !options.dry_run {
        let proceed = Confirm::new()
            .with_prompt("Proceed with propagation?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?;
        if !proceed {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    // =========================================================================
    // Phase 3: EXECUTE - effectful operations
    // =========================================================================

    let progress = CliProgress;
    let result = match execute_propagation(&plan, &ctx.git, &progress, options.dry_run).await {
        Ok(result) => result,
        // Fetch/checkout/reset/push failures are fatal without special handling
        Err(e) => return fail(&reporter, e),
    };

    if let Some(step) = result.failed_step {
        let message = result
            .error_message
            .unwrap_or_else(|| format!("Failed to merge {} into {}", step.source, step.dest));

        reporter.set_output("error", &message)?;
        reporter.set_failed(&message)?;

        println!();
        println!("{}", message.error());
        println!(
            "{}",
            "Resolve the conflicts manually, then re-run.".muted()
        );

        return Err(Error::MergeConflict {
            source_branch: step.source,
            dest_branch: step.dest,
        });
    }

    println!();
    if options.dry_run {
        println!("{}", "Dry run complete".muted());
    } else {
        println!(
            "{} {} branch(es) synced, {} merge(s) pushed",
            format!("{CHECK} Propagation complete:").success(),
            result.synced_branches.len().accent(),
            result.merge_count().accent()
        );
    }

    Ok(())
}

/// Report a fatal error to the CI surface and propagate it
fn fail<T>(reporter: &dyn RunReporter, error: Error) -> Result<T> {
    reporter.set_failed(&error.to_string())?;
    Err(error)
}
