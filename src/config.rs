//! Configuration for branch-relay
//!
//! Branch patterns come from (in priority order) the CLI, a patterns file,
//! the `INPUT_BRANCHES` environment variable, or `.relay.toml`. Everything
//! else (remote override, auto-resolve whitelist, committer identity) lives
//! in `.relay.toml` at the repository root.

use crate::error::{Error, Result};
use crate::types::Committer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filename for the config file at the repository root.
const CONFIG_FILE: &str = ".relay.toml";

/// Merge-policy section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Paths whose conflicts may be auto-resolved by keeping the
    /// destination branch's copy. One well-known version-marker file
    /// by default.
    pub auto_resolve: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            auto_resolve: vec!["VERSION".to_string()],
        }
    }
}

/// Full configuration for a relay run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Branch target patterns, in declaration order
    pub branches: Vec<String>,
    /// Remote name override; autodetected from `git remote` when absent
    pub remote: Option<String>,
    /// Merge conflict policy
    pub merge: MergeConfig,
    /// Identity for generated merge commits
    pub committer: Committer,
}

impl RelayConfig {
    /// Load configuration from `.relay.toml` under `root`.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

        Ok(config)
    }

    /// Resolve the pattern list, preferring `explicit` (CLI/file/env) over
    /// the config file's `branches`.
    ///
    /// The pattern list is required input: an empty result is an error.
    pub fn resolve_patterns(&self, explicit: Option<Vec<String>>) -> Result<Vec<String>> {
        let patterns = match explicit {
            Some(list) if !list.is_empty() => list,
            _ => self.branches.clone(),
        };

        if patterns.is_empty() {
            return Err(Error::MissingPatterns(
                "pass patterns on the command line, via --branches-file, \
                 the INPUT_BRANCHES environment variable, or `branches` in .relay.toml"
                    .to_string(),
            ));
        }

        Ok(patterns)
    }
}

/// Split a newline-delimited pattern list into trimmed, non-empty entries.
pub fn parse_pattern_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
