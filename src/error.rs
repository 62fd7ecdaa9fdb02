//! Error types for branch-relay

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by branch-relay operations
#[derive(Debug, Error)]
pub enum Error {
    /// Pattern list was missing or empty
    #[error("no branch patterns given: {0}")]
    MissingPatterns(String),

    /// A branch pattern failed to compile as a regular expression
    #[error("invalid branch pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as the user wrote it
        pattern: String,
        /// The underlying regex compilation error
        source: regex::Error,
    },

    /// Remote branch enumeration failed or returned malformed output
    #[error("failed to enumerate remote branches: {0}")]
    Inventory(String),

    /// A git command exited nonzero where success was required
    #[error("git {command} failed (exit code {code}): {stderr}")]
    GitCommand {
        /// The git subcommand that failed (e.g. "fetch")
        command: String,
        /// Exit code reported by git
        code: i32,
        /// Captured stderr, trimmed
        stderr: String,
    },

    /// A git command could not be spawned at all
    #[error("failed to run git: {0}")]
    GitSpawn(#[from] std::io::Error),

    /// A merge produced conflicts outside the auto-resolve whitelist
    #[error("failed to merge {source_branch} into {dest_branch}")]
    MergeConflict {
        /// Branch being merged from
        source_branch: String,
        /// Branch being merged into
        dest_branch: String,
    },

    /// Configuration file was unreadable or malformed
    #[error("config error: {0}")]
    Config(String),

    /// Run-outcome reporting failed (e.g. output file unwritable)
    #[error("failed to report run outcome: {0}")]
    Report(String),

    /// Internal error that should not occur in normal operation
    #[error("internal error: {0}")]
    Internal(String),
}
