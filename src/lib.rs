//! branch-relay - forward-merge release branches in semantic version order
//!
//! Given a declared list of branch name patterns (possibly with version
//! wildcards), branch-relay resolves them against the branches that
//! actually exist on the remote, orders them by semantic version, and
//! merges each branch forward into the next. Conflicts confined to a
//! well-known version-marker file resolve automatically in favor of the
//! destination branch; anything else stops the run loudly.

pub mod config;
pub mod error;
pub mod git;
pub mod propagate;
pub mod report;
pub mod resolve;
pub mod types;
