//! relay - forward-merge release branches
//!
//! CLI binary for propagating changes down a release branch chain.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Forward-merge release branches in semantic version order")]
#[command(version)]
struct Cli {
    /// Path to the git repository (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve branch patterns and show the merge plan without touching anything
    Plan {
        /// Branch patterns, in merge-chain order
        patterns: Vec<String>,

        /// File with a newline-delimited pattern list
        #[arg(long)]
        branches_file: Option<PathBuf>,

        /// Git remote to resolve against
        #[arg(long)]
        remote: Option<String>,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve branch patterns and merge each branch into the next
    Run {
        /// Branch patterns, in merge-chain order
        patterns: Vec<String>,

        /// File with a newline-delimited pattern list
        #[arg(long)]
        branches_file: Option<PathBuf>,

        /// Git remote to fetch from and push to
        #[arg(long)]
        remote: Option<String>,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Preview the plan and prompt for confirmation before executing
        #[arg(long)]
        confirm: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        None => {
            // Default: read-only plan preview
            cli::run_plan(&path, cli::PlanOptions::default()).await?;
        }
        Some(Commands::Plan {
            patterns,
            branches_file,
            remote,
            json,
        }) => {
            cli::run_plan(&path, cli::PlanOptions {
                patterns,
                branches_file,
                remote,
                json,
            })
            .await?;
        }
        Some(Commands::Run {
            patterns,
            branches_file,
            remote,
            dry_run,
            confirm,
        }) => {
            cli::run_propagate(&path, cli::RunOptions {
                patterns,
                branches_file,
                remote,
                dry_run,
                confirm,
            })
            .await?;
        }
    }

    Ok(())
}
