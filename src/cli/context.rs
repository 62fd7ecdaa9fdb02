//! Shared command context for CLI commands
//!
//! Extracts the setup code shared by plan and run: loading config,
//! gathering the pattern list from its possible sources, and selecting
//! the remote.

use branch_relay::config::{RelayConfig, parse_pattern_list};
use branch_relay::error::{Error, Result};
use branch_relay::git::{CliGit, GitClient};
use branch_relay::report::read_input;
use std::fs;
use std::path::{Path, PathBuf};

/// Shared context for CLI commands
///
/// Holds everything a command needs before touching branch state:
/// the config file contents, the resolved pattern list, the git client,
/// and the remote name.
pub struct CommandContext {
    /// Loaded configuration (defaults when `.relay.toml` is absent)
    pub config: RelayConfig,
    /// Branch target patterns, in declaration order
    pub patterns: Vec<String>,
    /// Git client operating on the repository
    pub git: CliGit,
    /// Selected remote name
    pub remote_name: String,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Pattern sources, first match wins: positional CLI patterns, a
    /// patterns file, the `INPUT_BRANCHES` environment variable, then
    /// `branches` in the config file. The remote is the CLI override,
    /// the config override, or whatever `git remote` reports.
    pub async fn new(
        path: &Path,
        cli_patterns: Vec<String>,
        branches_file: Option<&PathBuf>,
        remote: Option<&str>,
    ) -> Result<Self> {
        let config = RelayConfig::load(path)?;

        let explicit = if cli_patterns.is_empty() {
            gathered_patterns(branches_file)?
        } else {
            Some(cli_patterns)
        };
        let patterns = config.resolve_patterns(explicit)?;

        let git = CliGit::in_dir(path);

        let remote_name = match remote.map(ToString::to_string).or_else(|| config.remote.clone()) {
            Some(name) => name,
            None => git.remote_name().await?,
        };

        Ok(Self {
            config,
            patterns,
            git,
            remote_name,
        })
    }
}

/// Patterns from the file or CI input sources, if either is present.
fn gathered_patterns(branches_file: Option<&PathBuf>) -> Result<Option<Vec<String>>> {
    if let Some(path) = branches_file {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        return Ok(Some(parse_pattern_list(&raw)));
    }

    Ok(read_input("branches").map(|raw| parse_pattern_list(&raw)))
}
