//! Test data factories for branch-relay types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use branch_relay::config::{MergeConfig, RelayConfig};
use branch_relay::propagate::{PropagationPlan, create_propagation_plan};
use branch_relay::types::Committer;

/// Owned branch list from string literals
pub fn branches(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Config with the default whitelist (`VERSION` only)
pub fn default_config() -> RelayConfig {
    RelayConfig::default()
}

/// Config with an explicit auto-resolve whitelist
pub fn config_with_whitelist(paths: &[&str]) -> RelayConfig {
    RelayConfig {
        merge: MergeConfig {
            auto_resolve: paths.iter().map(ToString::to_string).collect(),
        },
        ..RelayConfig::default()
    }
}

/// Config with an explicit committer identity
pub fn config_with_committer(name: &str, email: &str) -> RelayConfig {
    RelayConfig {
        committer: Committer {
            name: name.to_string(),
            email: email.to_string(),
        },
        ..RelayConfig::default()
    }
}

/// Plan over the given chain with default settings and "origin" remote
pub fn make_plan(chain: &[&str]) -> PropagationPlan {
    create_propagation_plan(&branches(chain), "origin", &default_config())
}
