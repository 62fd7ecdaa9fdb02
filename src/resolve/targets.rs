//! Pattern expansion against the branch inventory

use super::version::compare_versionish;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Shape probe for version-bearing branch names: a prefix ending in a
/// separator, followed by a dotted numeric triple (`release-6.7.0`).
/// The first capture is the shared group prefix.
static VERSION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+-)\d+\.\d+\.\d+").expect("hardcoded version shape is valid")
});

/// Expand target patterns into the resolved branch sequence.
///
/// Each pattern is matched against the whole inventory (anchored at both
/// ends), producing a group. Groups keep pattern declaration order;
/// within a multi-member group, branches sort ascending by version.
/// A pattern matching nothing contributes an empty group, silently.
pub fn resolve_targets(patterns: &[String], inventory: &[String]) -> Result<Vec<String>> {
    let mut resolved = Vec::new();

    for pattern in patterns {
        let group = expand_pattern(pattern, inventory)?;
        debug!("pattern '{pattern}' matched {} branch(es)", group.len());
        resolved.extend(order_group(group));
    }

    Ok(resolved)
}

/// Filter the inventory down to names fully matching the pattern.
///
/// The pattern is wrapped in `^(?:...)$` so a name matches only when the
/// entire name satisfies it, never a substring.
fn expand_pattern(pattern: &str, inventory: &[String]) -> Result<Vec<String>> {
    let anchored = format!("^(?:{pattern})$");
    let re = Regex::new(&anchored).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(inventory
        .iter()
        .filter(|name| re.is_match(name))
        .cloned()
        .collect())
}

/// Order a branch group ascending by version.
///
/// A single-member group passes through untouched — no version parsing is
/// attempted, so patterns denoting one fixed branch never get reordered.
/// Multi-member groups are probed for a shared version-bearing prefix via
/// one representative member; when found, the version remainders are
/// sorted and the prefix reattached. Otherwise the full names themselves
/// are sorted as versions (degraded path for groups with no recognizable
/// shape).
fn order_group(mut group: Vec<String>) -> Vec<String> {
    if group.len() <= 1 {
        return group;
    }

    if let Some(prefix) = VERSION_SHAPE
        .captures(&group[0])
        .map(|caps| caps[1].to_string())
    {
        let mut suffixes: Vec<&str> = group
            .iter()
            .map(|name| name.strip_prefix(&prefix).map_or(name.as_str(), |s| s))
            .collect();
        suffixes.sort_by(|a, b| compare_versionish(a, b));

        suffixes
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect()
    } else {
        group.sort_by(|a, b| compare_versionish(a, b));
        group
    }
}
